use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tailrec::tailrec;
use tailrec_tests::{reference, steps, utils::init_logger};

const ROUNDS: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x7a11_7ec5)
}

#[test]
fn sum() {
    init_logger();
    let mut rng = rng();
    let sum = tailrec(steps::sum);
    for _ in 0..ROUNDS {
        let n = rng.random_range(0..2_000u64);
        let acc = rng.random_range(0..1_000_000u64);
        assert_eq!(sum((n, acc)), reference::sum(n, acc), "n = {}, acc = {}", n, acc);
    }
}

#[test]
fn gcd() {
    let mut rng = rng();
    let gcd = tailrec(steps::gcd);
    for _ in 0..ROUNDS {
        let a = rng.random_range(0..u32::MAX as u64);
        let b = rng.random_range(0..u32::MAX as u64);
        assert_eq!(gcd((a, b)), reference::gcd(a, b), "a = {}, b = {}", a, b);
    }
}

#[test]
fn parity() {
    let mut rng = rng();
    let is_even = tailrec(steps::is_even);
    for _ in 0..ROUNDS {
        let n = rng.random_range(0..4_000u64);
        assert_eq!(is_even((n,)), reference::is_even(n), "n = {}", n);
    }
}
