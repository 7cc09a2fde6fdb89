use crate::cli::Demo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    TrampError(#[from] tailrec::TrampError),
    #[error("`{demo}` takes {expected} argument(s), got {found}")]
    Arity { demo: Demo, expected: usize, found: usize },
    #[error("`{demo}` is not defined for {input}")]
    Domain { demo: Demo, input: u64 },
    #[error("`{demo}` overflowed at {input}")]
    Overflow { demo: Demo, input: u64 },
    #[error("`{0}` cannot be tabulated, it takes more than one argument")]
    NotTabular(Demo),
}

pub type Result<T> = std::result::Result<T, CliError>;
