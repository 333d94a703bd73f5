//! Modular addition, multiplication, and exponentiation
//!
//! Every function here computes over operands already reduced below the
//! modulus, and requires the modulus to leave enough headroom in the
//! fixed capacity: because products are formed in full before reduction,
//! the modulus may occupy at most **half** the capacity
//! (`bit_len(n) ≤ 16·W`). The headroom requirement is asserted in debug
//! builds; violating it in release builds truncates the product and
//! silently produces wrong residues.

use crate::primitives::BigUnsigned;

/// Modular addition `(a + b) mod n`.
///
/// Reduces with a single conditional subtraction, so both operands must
/// already be below `n`; this is not checked.
pub fn add_mod<const W: usize>(
    a: &BigUnsigned<W>,
    b: &BigUnsigned<W>,
    n: &BigUnsigned<W>,
) -> BigUnsigned<W> {
    let mut sum = *a + *b;
    if sum >= *n {
        sum = sum - *n;
    }
    sum
}

/// Modular multiplication `(a * b) mod n`.
///
/// Computes the full product and reduces it with one division. Returns
/// zero immediately when `n` is one.
///
/// # Panics
/// Panics when `n` is zero.
pub fn mul_mod<const W: usize>(
    a: &BigUnsigned<W>,
    b: &BigUnsigned<W>,
    n: &BigUnsigned<W>,
) -> BigUnsigned<W> {
    debug_assert!(
        n.bit_len() * 2 <= BigUnsigned::<W>::BITS,
        "modulus occupies more than half the capacity"
    );

    if n.is_one() {
        return BigUnsigned::ZERO;
    }

    (*a * *b) % *n
}

/// Modular exponentiation `base^exp mod n` by square-and-multiply.
///
/// Scans the exponent bits from least to most significant, squaring a
/// running base each step and multiplying it into the result whenever
/// the bit is set. The base is reduced by `n` up front. Returns zero
/// when `n` is one. Costs O(bit_len(exp)) modular multiplications.
///
/// # Panics
/// Panics when `n` is zero.
pub fn power_mod<const W: usize>(
    base: &BigUnsigned<W>,
    exp: &BigUnsigned<W>,
    n: &BigUnsigned<W>,
) -> BigUnsigned<W> {
    if n.is_one() {
        return BigUnsigned::ZERO;
    }

    let mut result = BigUnsigned::ONE;
    let mut running = *base % *n;

    for i in 0..exp.bit_len() {
        if exp.bit(i) {
            result = mul_mod(&result, &running, n);
        }
        running = mul_mod(&running, &running, n);
    }

    result
}
