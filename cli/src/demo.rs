//! The demonstration functions behind `tailrec run` and `tailrec table`.
//!
//! Each demo is written as a step function and driven by a different form
//! of the trampoline, all bounded by the same [`Limits`].

use crate::{
    cli::Demo,
    err::{CliError, Result},
};
use clap::ValueEnum;
use rayon::prelude::*;
use std::fmt;
use tailrec::{Limits, Step, Trampoline, call, done};

/// What a demo hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Num(u128),
    Bool(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Answer::Num(n) => write!(f, "{}", n),
            | Answer::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            | Some(value) => f.write_str(value.get_name()),
            | None => write!(f, "{:?}", self),
        }
    }
}

impl Demo {
    pub fn arity(self) -> usize {
        match self {
            | Demo::Gcd | Demo::Digits => 2,
            | Demo::Sum | Demo::Factorial | Demo::Fib | Demo::Collatz | Demo::Even => 1,
        }
    }
    /// One-line description, taken from the command line help.
    pub fn about(self) -> String {
        self.to_possible_value()
            .and_then(|value| value.get_help().map(|help| help.to_string()))
            .unwrap_or_default()
    }
    pub fn run(self, args: &[u64], limits: &Limits) -> Result<Answer> {
        log::debug!("running `{}` on {:?}", self, args);
        match (self, args) {
            | (Demo::Sum, &[n]) => sum(n, limits),
            | (Demo::Factorial, &[n]) => factorial(n, limits),
            | (Demo::Fib, &[n]) => fib(n, limits),
            | (Demo::Gcd, &[a, b]) => gcd(a, b, limits),
            | (Demo::Collatz, &[n]) => collatz(n, limits),
            | (Demo::Even, &[n]) => even(n, limits),
            | (Demo::Digits, &[n, base]) => digits(n, base, limits),
            | (demo, args) => {
                Err(CliError::Arity { demo, expected: demo.arity(), found: args.len() })
            }
        }
    }
    /// Run a one-argument demo on every input in `0..=upto`.
    ///
    /// The runs are independent and spread over the rayon pool; the rows come
    /// back in input order.
    pub fn table(self, upto: u64, limits: &Limits) -> Result<Vec<(u64, Result<Answer>)>> {
        if self.arity() != 1 {
            Err(CliError::NotTabular(self))?
        }
        Ok((0..=upto).into_par_iter().map(|n| (n, self.run(&[n], limits))).collect())
    }
}

fn sum(n: u64, limits: &Limits) -> Result<Answer> {
    let total = limits.run((n, 0u128), |(n, acc)| {
        if n == 0 { done(acc) } else { call((n - 1, acc + n as u128)) }
    })?;
    Ok(Answer::Num(total))
}

fn factorial(n: u64, limits: &Limits) -> Result<Answer> {
    let total = limits.try_run((n, 1u128), |(k, acc)| match k {
        | 0 => Ok(done(acc)),
        | k => match acc.checked_mul(k as u128) {
            | Some(acc) => Ok(call((k - 1, acc))),
            | None => Err(CliError::Overflow { demo: Demo::Factorial, input: n }),
        },
    })?;
    Ok(Answer::Num(total))
}

fn fib(n: u64, limits: &Limits) -> Result<Answer> {
    let fib = limits.clone().try_tailrec(|(k, a, b): (u64, u128, u128)| {
        if k == 0 {
            return Ok(done(a));
        }
        match a.checked_add(b) {
            | Some(next) => Ok(call((k - 1, b, next))),
            // the last round never reads `a + b`
            | None if k == 1 => Ok(done(b)),
            | None => Err(CliError::Overflow { demo: Demo::Fib, input: n }),
        }
    });
    Ok(Answer::Num(fib((n, 0, 1))?))
}

fn gcd(a: u64, b: u64, limits: &Limits) -> Result<Answer> {
    let gcd = limits.clone().tailrec(|(a, b): (u64, u64)| {
        if b == 0 { done(a) } else { call((b, a % b)) }
    });
    Ok(Answer::Num(gcd((a, b))? as u128))
}

/// Collatz orbit as a machine: the current value and the steps taken so far.
struct Collatz {
    n: u64,
    steps: u64,
}

impl Trampoline for Collatz {
    /// `None` once `3n + 1` no longer fits
    type Out = Option<u64>;
    fn step(self) -> Step<Self, Option<u64>> {
        let Collatz { n, steps } = self;
        match n {
            | 1 => done(Some(steps)),
            | n if n % 2 == 0 => call(Collatz { n: n / 2, steps: steps + 1 }),
            | n => match n.checked_mul(3).and_then(|m| m.checked_add(1)) {
                | Some(n) => call(Collatz { n, steps: steps + 1 }),
                | None => done(None),
            },
        }
    }
}

fn collatz(n: u64, limits: &Limits) -> Result<Answer> {
    if n == 0 {
        Err(CliError::Domain { demo: Demo::Collatz, input: n })?
    }
    let machine = Collatz { n, steps: 0 };
    match machine.eval_limited(limits)? {
        | Some(steps) => Ok(Answer::Num(steps as u128)),
        | None => Err(CliError::Overflow { demo: Demo::Collatz, input: n }),
    }
}

fn even(n: u64, limits: &Limits) -> Result<Answer> {
    let even = limits.clone().tailrec_self(|this, (n,): (u64,)| match n {
        | 0 => done(true),
        | 1 => done(false),
        | n => this.recur((n - 2,)),
    });
    Ok(Answer::Bool(even((n,))?))
}

fn digits(n: u64, base: u64, limits: &Limits) -> Result<Answer> {
    if base < 2 {
        Err(CliError::Domain { demo: Demo::Digits, input: base })?
    }
    // `[n, base, count]`
    let digits = limits.clone().tailrec_variadic(3, |args: &[u64]| match *args {
        | [n, base, count] if n < base => done(count),
        | [n, base, count] => call(vec![n / base, base, count + 1]),
        | _ => unreachable!("argument lists are checked against the arity"),
    });
    Ok(Answer::Num(digits(vec![n, base, 1])? as u128))
}
