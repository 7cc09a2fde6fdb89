//! The value a step function hands back to the driver on every iteration.

use std::fmt;

/// One step of a trampolined computation over argument tuple `A` with result `R`.
///
/// A step either finishes with a result or asks for another round with a
/// fresh argument tuple. Outside this crate the two cases can only be built
/// through [`done`], [`call`] and [`Recur::recur`](crate::Recur::recur), and
/// only the drivers take a step apart again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<A, R>(pub(crate) Bounce<A, R>);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bounce<A, R> {
    Done(R),
    Continue(A),
}

/// Finish the computation with `value`.
pub fn done<A, R>(value: R) -> Step<A, R> {
    Step(Bounce::Done(value))
}

/// Go around once more with the argument tuple `args`.
pub fn call<A, R>(args: A) -> Step<A, R> {
    Step(Bounce::Continue(args))
}

impl<A, R> fmt::Debug for Step<A, R>
where
    A: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            | Bounce::Done(out) => f.debug_tuple("Done").field(out).finish(),
            | Bounce::Continue(args) => f.debug_tuple("Continue").field(args).finish(),
        }
    }
}
