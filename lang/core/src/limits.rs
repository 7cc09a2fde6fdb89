//! Optional bounds on a single run: a bounce budget and cooperative
//! cancellation. Both are checked at the top of every iteration, before the
//! step function is invoked.

use crate::{
    driver::drive,
    err::{Result, TrampError},
    step::Step,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A flag shared between a running trampoline and whoever may want to stop it.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Bounds for one run. The default bounds nothing.
///
/// With `fuel = n` a run may bounce `n` times; the `n + 1`-th bounce ends it
/// with [`TrampError::OutOfFuel`] instead of invoking the step function again.
///
/// ```ignore
/// let sum = Limits::new().fuel(100).tailrec(|(n, acc): (u64, u64)| {
///     if n == 0 { done(acc) } else { call((n - 1, acc + n)) }
/// });
/// assert_eq!(sum((100, 0)), Ok(5050));
/// assert_eq!(sum((101, 0)), Err(TrampError::OutOfFuel { fuel: 100 }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// how many bounces a run may take
    pub fuel: Option<u64>,
    pub cancel: Option<CancelToken>,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn fuel(self, fuel: u64) -> Self {
        Limits { fuel: Some(fuel), ..self }
    }
    pub fn cancel_on(self, token: CancelToken) -> Self {
        Limits { cancel: Some(token), ..self }
    }
    /// Check the bounds before the next invocation, `bounces` into the run.
    pub fn check(&self, bounces: u64) -> Result<()> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                log::debug!("trampoline cancelled after {} bounce(s)", bounces);
                Err(TrampError::Cancelled { bounces })?
            }
        }
        if let Some(fuel) = self.fuel {
            if bounces > fuel {
                log::debug!("trampoline ran out of fuel ({} bounce(s))", fuel);
                Err(TrampError::OutOfFuel { fuel })?
            }
        }
        Ok(())
    }
}

impl Limits {
    /// Run a step function once from `args` within these limits.
    pub fn run<A, R>(&self, args: A, mut f: impl FnMut(A) -> Step<A, R>) -> Result<R> {
        drive(args, |args| Ok(f(args)), |bounces| self.check(bounces))
    }
    /// Run a fallible step function once; limit violations are converted
    /// into the step function's own error type.
    pub fn try_run<A, R, E>(
        &self, args: A, f: impl FnMut(A) -> std::result::Result<Step<A, R>, E>,
    ) -> std::result::Result<R, E>
    where
        E: From<TrampError>,
    {
        drive(args, f, |bounces| self.check(bounces).map_err(E::from))
    }
    /// Bounded counterpart of [`tailrec`](crate::tailrec).
    pub fn tailrec<A, R, F>(self, f: F) -> impl Fn(A) -> Result<R>
    where
        F: Fn(A) -> Step<A, R>,
    {
        move |args| self.run(args, &f)
    }
    /// Bounded counterpart of [`try_tailrec`](crate::try_tailrec).
    pub fn try_tailrec<A, R, E, F>(self, f: F) -> impl Fn(A) -> std::result::Result<R, E>
    where
        E: From<TrampError>,
        F: Fn(A) -> std::result::Result<Step<A, R>, E>,
    {
        move |args| self.try_run(args, &f)
    }
}
