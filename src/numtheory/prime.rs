//! Primality testing
//!
//! Candidates are screened in three stages: parity and smallness checks,
//! trial division by the first small primes, and finally Miller–Rabin
//! against the fixed deterministic witness set followed by random
//! witnesses.
//!
//! A single failing witness is conclusive proof of compositeness. All
//! witnesses passing is only probabilistic evidence of primality, with
//! error probability bounded by 4⁻ʳ for r witness rounds.

use crate::numtheory::modular::{mul_mod, power_mod};
use crate::primitives::BigUnsigned;
use crate::rng::WitnessRng;

/// The first 24 odd primes, used for trial division.
const SMALL_PRIMES: [u32; 24] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Small-prime bases tried before any random witness. Every base in this
/// list is known to be a strong witness set for 64-bit candidates.
const DETERMINISTIC_WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Total Miller–Rabin rounds used by [`is_prime`].
const MILLER_RABIN_ROUNDS: usize = 40;

/// Screens a candidate against the small-prime table.
///
/// Returns `false` only when an exact small-prime factor is found; `true`
/// means "not ruled out by small primes", never "prime". Pure pre-filter.
pub fn trial_division<const W: usize>(n: &BigUnsigned<W>) -> bool {
    for small in [2u32, 3, 5, 7] {
        if *n == BigUnsigned::from(small) {
            return true;
        }
    }

    for p in SMALL_PRIMES {
        let p = BigUnsigned::from(p);
        if *n == p {
            return true;
        }
        if (*n % p).is_zero() {
            return false;
        }
    }

    true
}

/// Runs one Miller–Rabin round against witness `a`.
///
/// Callers guarantee `n` odd, `n >= 5`, and `2 <= a < n`.
fn miller_rabin_witness<const W: usize>(n: &BigUnsigned<W>, a: &BigUnsigned<W>) -> bool {
    let n_minus_one = *n - BigUnsigned::ONE;

    // n - 1 = 2^s * d with d odd
    let mut d = n_minus_one;
    let mut s = 0usize;
    while d.is_even() {
        d = d >> 1;
        s += 1;
    }

    let mut x = power_mod(a, &d, n);
    if x.is_one() || x == n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = mul_mod(&x, &x, n);
        if x == n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }

    false
}

/// Draws a random witness in `[2, n − 2]`.
fn random_witness<const W: usize>(n: &BigUnsigned<W>, rng: &mut WitnessRng) -> BigUnsigned<W> {
    let two = BigUnsigned::from(2u32);

    if *n < BigUnsigned::from(4u32) {
        return two;
    }

    let range = *n - BigUnsigned::from(3u32);
    let a = rng.sample_below(&range) + two;

    if a >= *n - BigUnsigned::ONE { two } else { a }
}

/// Miller–Rabin probable-prime test.
///
/// Handles `n < 2`, `n ∈ {2, 3}`, and even `n` directly, then runs
/// witness rounds: first the deterministic small-prime bases (stopping
/// early once a base reaches `n`, since such a base is meaningless),
/// then random witnesses up to `rounds` total. Short-circuits `false`
/// on the first failing witness.
pub fn miller_rabin<const W: usize>(
    n: &BigUnsigned<W>,
    rounds: usize,
    rng: &mut WitnessRng,
) -> bool {
    let two = BigUnsigned::from(2u32);

    if *n < two {
        return false;
    }
    if *n == two || *n == BigUnsigned::from(3u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    for (i, base) in DETERMINISTIC_WITNESSES.into_iter().enumerate() {
        if i >= rounds {
            break;
        }

        let a = BigUnsigned::from(base);
        if a >= *n {
            break;
        }

        if !miller_rabin_witness(n, &a) {
            return false;
        }
    }

    for _ in DETERMINISTIC_WITNESSES.len()..rounds {
        let a = random_witness(n, rng);
        if !miller_rabin_witness(n, &a) {
            return false;
        }
    }

    true
}

/// Top-level primality test.
///
/// Rejects `n < 2` and even candidates, screens with trial division,
/// then defers to [`miller_rabin`] with a fixed round count.
pub fn is_prime<const W: usize>(n: &BigUnsigned<W>, rng: &mut WitnessRng) -> bool {
    let two = BigUnsigned::from(2u32);

    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    if !trial_division(n) {
        return false;
    }

    miller_rabin(n, MILLER_RABIN_ROUNDS, rng)
}
