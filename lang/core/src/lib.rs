//! Constant-stack self recursion.
//!
//! A function written in recursive style returns a [`Step`] instead of
//! calling itself: [`done`] when it has its answer, [`call`] with the next
//! arguments otherwise. A driver such as [`tailrec`](fn@tailrec) runs the
//! steps in a loop, so the call stack stays flat however deep the logical
//! recursion goes.
//!
//! ```ignore
//! use tailrec::{call, done, tailrec};
//!
//! let sum = tailrec(|(n, acc): (u64, u64)| if n == 0 { done(acc) } else { call((n - 1, acc + n)) });
//! assert_eq!(sum((1_000_000, 0)), 500_000_500_000);
//! ```

#![allow(clippy::style)]

pub mod err;
pub mod step;
pub mod driver;
pub mod recur;
pub mod machine;
pub mod limits;
pub mod variadic;

pub use driver::{run, tailrec, try_tailrec};
pub use err::TrampError;
pub use limits::{CancelToken, Limits};
pub use machine::Trampoline;
pub use recur::{Recur, tailrec_self};
pub use step::{Step, call, done};
pub use variadic::tailrec_variadic;

/// Attribute form of [`tailrec`](fn@tailrec) for free functions.
pub use tailrec_derive::tailrec;

pub mod prelude {
    pub use crate::{Recur, Step, Trampoline, call, done, tailrec, tailrec_self};
}
