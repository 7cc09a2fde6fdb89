//! Drivers turning a step function back into an ordinary function.
//!
//! All of them share [`drive`]: the user function is called with the current
//! argument tuple, a `Continue` rebinds the tuple and goes around again, and a
//! `Done` is the only way out. The driver never calls itself, so the stack
//! depth of a run does not depend on how many bounces it takes.

use crate::step::{Bounce, Step};
use std::convert::Infallible;

/// The loop behind every driver.
///
/// `guard` is consulted before each invocation of `f` with the number of
/// bounces taken so far; an error from either `guard` or `f` ends the run
/// as is.
pub(crate) fn drive<A, R, E>(
    mut args: A, mut f: impl FnMut(A) -> Result<Step<A, R>, E>,
    mut guard: impl FnMut(u64) -> Result<(), E>,
) -> Result<R, E> {
    let mut bounces: u64 = 0;
    loop {
        guard(bounces)?;
        match f(args)?.0 {
            | Bounce::Done(out) => {
                log::trace!("trampoline landed after {} bounce(s)", bounces);
                break Ok(out);
            }
            | Bounce::Continue(next) => {
                args = next;
                bounces += 1;
            }
        }
    }
}

pub(crate) fn infallible<T>(res: Result<T, Infallible>) -> T {
    match res {
        | Ok(t) => t,
        | Err(never) => match never {},
    }
}

/// Wrap a step function into a function returning its final result directly.
///
/// ```ignore
/// let sum = tailrec(|(n, acc): (u64, u64)| if n == 0 { done(acc) } else { call((n - 1, acc + n)) });
/// assert_eq!(sum((1_000_000, 0)), 500_000_500_000);
/// ```
///
/// Panics raised by `f` pass through untouched. The wrapped function is
/// `Send`/`Sync` whenever `f` is, and each call owns its own arguments.
pub fn tailrec<A, R, F>(f: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> Step<A, R>,
{
    move |args| run(args, &f)
}

/// Run a step function once from `args` until it is done.
///
/// Unlike [`tailrec`] this accepts a stateful `FnMut`.
pub fn run<A, R>(args: A, mut f: impl FnMut(A) -> Step<A, R>) -> R {
    infallible(drive(args, |args| Ok(f(args)), |_| Ok(())))
}

/// Like [`tailrec`] for step functions that may fail.
///
/// The first `Err` produced by `f` is handed back unchanged and `f` is not
/// called again.
pub fn try_tailrec<A, R, E, F>(f: F) -> impl Fn(A) -> Result<R, E>
where
    F: Fn(A) -> Result<Step<A, R>, E>,
{
    move |args| drive(args, &f, |_| Ok(()))
}
