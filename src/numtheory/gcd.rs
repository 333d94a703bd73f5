//! Greatest common divisor and modular inverse
//!
//! The GCD is computed with the binary algorithm: common factors of two
//! are stripped into a power-of-two accumulator, then the operands are
//! alternately halved and subtracted until one reaches zero.
//!
//! The modular inverse runs the extended-Euclidean recurrence entirely
//! over unsigned values. The Bézout update `s2 = s0 − q·s1` can go
//! negative in the integers; when it would, it is reconstructed as
//! `phi − ((q·s1 − s0) mod phi)`, which relies on the saturating
//! subtraction contract of `BigUnsigned` to stay in the non-negative
//! domain.

use crate::primitives::BigUnsigned;

/// Binary GCD.
///
/// `gcd(0, b)` is `b` and `gcd(a, 0)` is `a`.
pub fn gcd<const W: usize>(a: &BigUnsigned<W>, b: &BigUnsigned<W>) -> BigUnsigned<W> {
    if a.is_zero() {
        return *b;
    }
    if b.is_zero() {
        return *a;
    }

    let mut x = *a;
    let mut y = *b;
    let mut res = BigUnsigned::ONE;

    while x.is_even() && y.is_even() {
        x = x >> 1;
        y = y >> 1;
        res = res << 1;
    }

    while !x.is_zero() {
        while x.is_even() {
            x = x >> 1;
        }
        while y.is_even() {
            y = y >> 1;
        }

        if x >= y {
            x = x - y;
        } else {
            y = y - x;
        }
    }

    res * y
}

/// Modular inverse `e⁻¹ mod phi`.
///
/// Returns `None` when no inverse exists — when `gcd(e, phi) ≠ 1`, or
/// when `phi` is zero. Like [`crate::numtheory::mul_mod`], the recurrence forms
/// full products of values below `phi`, so `phi` may occupy at most half
/// the fixed capacity.
pub fn mod_inverse<const W: usize>(
    e: &BigUnsigned<W>,
    phi: &BigUnsigned<W>,
) -> Option<BigUnsigned<W>> {
    if phi.is_zero() || !gcd(e, phi).is_one() {
        return None;
    }

    debug_assert!(
        phi.bit_len() * 2 <= BigUnsigned::<W>::BITS,
        "modulus occupies more than half the capacity"
    );

    let mut r0 = *phi;
    let mut r1 = *e;
    let mut s0 = BigUnsigned::ZERO;
    let mut s1 = BigUnsigned::ONE;

    while !r1.is_zero() {
        let q = r0 / r1;
        let r2 = r0 - q * r1;

        let q_s1 = q * s1;
        let s2 = if q_s1 <= s0 {
            s0 - q_s1
        } else {
            // s0 - q·s1 is negative in the integers; fold it back into
            // [0, phi) from the other side
            *phi - ((q_s1 - s0) % *phi)
        };

        r0 = r1;
        r1 = r2;
        s0 = s1;
        s1 = s2;
    }

    Some(s0 % *phi)
}
