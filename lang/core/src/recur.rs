//! The self-reference form: the step function receives a handle standing in
//! for "call myself", so recursive call sites read like ordinary recursion.

use crate::{
    driver::run,
    err::Result,
    limits::Limits,
    step::{Step, call},
};
use std::marker::PhantomData;

/// Handle for recursing from inside a step function.
///
/// A `Recur` is only ever lent to the step function for the duration of one
/// iteration; it cannot be built or kept outside the driver.
pub struct Recur<A, R> {
    _marker: PhantomData<fn(A) -> R>,
}

impl<A, R> Recur<A, R> {
    fn new() -> Self {
        Recur { _marker: PhantomData }
    }
    /// Describe a recursive call with `args`.
    ///
    /// Nothing runs here; the driver picks the arguments up on its next pass.
    pub fn recur(&self, args: A) -> Step<A, R> {
        call(args)
    }
}

/// Wrap a step function written against a [`Recur`] handle.
///
/// ```ignore
/// let sum = tailrec_self(|this, (n, acc): (u64, u64)| {
///     if n == 0 { done(acc) } else { this.recur((n - 1, acc + n)) }
/// });
/// ```
pub fn tailrec_self<A, R, F>(f: F) -> impl Fn(A) -> R
where
    F: Fn(&Recur<A, R>, A) -> Step<A, R>,
{
    move |args| {
        let this = Recur::new();
        run(args, |args| f(&this, args))
    }
}

impl Limits {
    /// Bounded counterpart of [`tailrec_self`].
    pub fn tailrec_self<A, R, F>(self, f: F) -> impl Fn(A) -> Result<R>
    where
        F: Fn(&Recur<A, R>, A) -> Step<A, R>,
    {
        move |args| {
            let this = Recur::new();
            self.run(args, |args| f(&this, args))
        }
    }
}
