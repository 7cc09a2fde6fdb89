use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrampError {
    #[error("argument shape mismatch: expected {expected} argument(s), found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("out of fuel: more than {fuel} bounce(s) requested")]
    OutOfFuel { fuel: u64 },
    #[error("cancelled after {bounces} bounce(s)")]
    Cancelled { bounces: u64 },
}

pub type Result<T> = std::result::Result<T, TrampError>;
