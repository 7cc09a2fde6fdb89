use pretty_assertions::assert_eq;
use std::cell::Cell;
use tailrec::{Step, done, tailrec_self};
use tailrec_tests::{equiv, reference};

equiv!(
    gcd,
    tailrec_self(|this, (a, b): (u64, u64)| if b == 0 { done(a) } else { this.recur((b, a % b)) }),
    |(a, b)| reference::gcd(a, b),
    [(0, 0), (48, 18), (1071, 462), (89, 55)]
);
equiv!(
    collatz,
    tailrec_self(|this, (n, steps): (u64, u64)| match n {
        | 1 => done(steps),
        | n if n % 2 == 0 => this.recur((n / 2, steps + 1)),
        | n => this.recur((3 * n + 1, steps + 1)),
    }),
    |(n, steps)| reference::collatz(n, steps),
    [(1, 0), (6, 0), (27, 0)]
);

#[test]
fn recur_yields_a_descriptor() {
    let calls = Cell::new(0u32);
    let captured: Cell<Option<Step<(u32,), u32>>> = Cell::new(None);
    let f = tailrec_self(|this, (n,): (u32,)| {
        calls.set(calls.get() + 1);
        if n == 0 {
            return done(n);
        }
        let step = this.recur((n - 1,));
        // `recur` did not run another iteration
        assert_eq!(calls.get(), 3 - n + 1);
        captured.set(Some(step));
        step
    });
    assert_eq!(f((3,)), 0);
    assert_eq!(calls.get(), 4);
    assert_eq!(captured.get(), Some(tailrec::call((0,))));
}
