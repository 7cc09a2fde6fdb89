use pretty_assertions::assert_eq;
use std::time::Duration;
use tailrec::{CancelToken, Limits, Step, TrampError, call, done, tailrec_variadic, try_tailrec};
use tailrec_tests::steps;

#[derive(Debug, PartialEq)]
struct Overflow(u32);

#[test]
fn checked_factorial() {
    let factorial = try_tailrec(|(n, acc): (u32, u128)| match n {
        | 0 => Ok(done(acc)),
        | n => acc.checked_mul(n as u128).map(|acc| call((n - 1, acc))).ok_or(Overflow(n)),
    });
    assert_eq!(factorial((34, 1)), Ok(295232799039604140847618609643520000000));
    assert_eq!(factorial((40, 1)), Err(Overflow(13)));
}

#[test]
fn fuel_counts_bounces() {
    let sum = Limits::new().fuel(100).tailrec(steps::sum);
    assert_eq!(sum((100, 0)), Ok(5050));
    assert_eq!(sum((101, 0)), Err(TrampError::OutOfFuel { fuel: 100 }));
}

#[test]
fn cancelled_from_another_thread() {
    let token = CancelToken::new();
    let canceller = {
        let token = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            token.cancel();
        })
    };
    let forever = Limits::new()
        .cancel_on(token)
        .tailrec(|(n,): (u64,)| -> Step<(u64,), ()> { call((n.wrapping_add(1),)) });
    match forever((0,)) {
        | Err(TrampError::Cancelled { bounces }) => assert!(bounces > 0),
        | res => panic!("expected cancellation, got {:?}", res),
    }
    canceller.join().expect("canceller panicked");
}

#[test]
fn variadic_sum() {
    let sum = tailrec_variadic(2, |args: &[u64]| match *args {
        | [0, acc] => done(acc),
        | [n, acc] => call(vec![n - 1, acc + n]),
        | _ => unreachable!(),
    });
    assert_eq!(sum(vec![1_000_000, 0]), Ok(500_000_500_000));
    assert_eq!(sum(vec![]), Err(TrampError::ShapeMismatch { expected: 2, found: 0 }));
    assert_eq!(sum(vec![1, 2, 3]), Err(TrampError::ShapeMismatch { expected: 2, found: 3 }));
}

#[test]
fn error_messages() {
    assert_eq!(
        TrampError::ShapeMismatch { expected: 2, found: 3 }.to_string(),
        "argument shape mismatch: expected 2 argument(s), found 3"
    );
    assert_eq!(
        TrampError::OutOfFuel { fuel: 10 }.to_string(),
        "out of fuel: more than 10 bounce(s) requested"
    );
    assert_eq!(TrampError::Cancelled { bounces: 4 }.to_string(), "cancelled after 4 bounce(s)");
}
