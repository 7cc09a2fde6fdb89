use crate::{driver::run, err::Result, limits::Limits, step::Step};

/// A state that knows how to take one step of its own computation.
///
/// Implementors describe a single transition in [`Trampoline::step`];
/// [`Trampoline::eval`] keeps stepping until a result comes out.
pub trait Trampoline: Sized {
    type Out;
    fn step(self) -> Step<Self, Self::Out>;
    fn eval(self) -> Self::Out {
        run(self, Self::step)
    }
    fn eval_limited(self, limits: &Limits) -> Result<Self::Out> {
        limits.run(self, Self::step)
    }
}
