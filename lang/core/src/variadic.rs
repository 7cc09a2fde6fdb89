//! Trampolines over argument lists whose length is only known at runtime.
//!
//! The tuple-typed drivers get their arity checked by the compiler. Here the
//! arguments travel as a `Vec`, so every list is checked against the declared
//! arity before the step function sees it.

use crate::{
    err::{Result, TrampError},
    limits::Limits,
    step::Step,
};

fn check_shape<T>(arity: usize, args: &[T]) -> Result<()> {
    if args.len() != arity {
        log::debug!("argument list of length {} rejected, expected {}", args.len(), arity);
        Err(TrampError::ShapeMismatch { expected: arity, found: args.len() })?
    }
    Ok(())
}

/// Wrap a step function taking exactly `arity` arguments.
///
/// Both the initial list and every continued list are checked; a list of the
/// wrong length fails with [`TrampError::ShapeMismatch`] and `f` is not
/// invoked on it.
pub fn tailrec_variadic<T, R, F>(arity: usize, f: F) -> impl Fn(Vec<T>) -> Result<R>
where
    F: Fn(&[T]) -> Step<Vec<T>, R>,
{
    Limits::default().tailrec_variadic(arity, f)
}

impl Limits {
    /// Bounded counterpart of [`tailrec_variadic`].
    pub fn tailrec_variadic<T, R, F>(self, arity: usize, f: F) -> impl Fn(Vec<T>) -> Result<R>
    where
        F: Fn(&[T]) -> Step<Vec<T>, R>,
    {
        move |args| {
            self.try_run(args, |args: Vec<T>| {
                check_shape(arity, &args)?;
                Ok::<_, TrampError>(f(&args))
            })
        }
    }
}
