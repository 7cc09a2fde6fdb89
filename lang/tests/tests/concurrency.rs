//! Independent invocations of one wrapped function on several threads.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use tailrec::{tailrec, tailrec_self};
use tailrec_tests::{reference, steps};

#[test]
fn shared_across_scoped_threads() {
    let sum = tailrec(steps::sum);
    let sum = &sum;
    let results: Vec<u64> = std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..8u64).map(|i| scope.spawn(move || sum((100_000 * (i + 1), 0)))).collect();
        handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
    });
    for (i, res) in results.into_iter().enumerate() {
        let n = 100_000 * (i as u64 + 1);
        assert_eq!(res, n * (n + 1) / 2);
    }
}

#[test]
fn parallel_map() {
    let collatz = tailrec(steps::collatz);
    let parallel: Vec<u64> = (1..2_000u64).into_par_iter().map(|n| collatz((n, 0))).collect();
    let sequential: Vec<u64> = (1..2_000u64).map(|n| reference::collatz(n, 0)).collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn self_reference_form_in_parallel() {
    let gcd = tailrec_self(|this, (a, b): (u64, u64)| {
        if b == 0 { tailrec::done(a) } else { this.recur((b, a % b)) }
    });
    let total: u64 = (1..500u64).into_par_iter().map(|n| gcd((n * 6, 84))).sum();
    let expected: u64 = (1..500u64).map(|n| reference::gcd(n * 6, 84)).sum();
    assert_eq!(total, expected);
}
