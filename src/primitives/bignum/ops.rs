//! Arithmetic and comparison operations for `BigUnsigned`
//!
//! This module implements the comparison and arithmetic operator traits
//! for the `BigUnsigned` type.
//!
//! All operations work directly on the fixed-size word array, with:
//! - no heap allocation
//! - 64-bit intermediates for carry and borrow propagation
//! - truncating semantics at the fixed capacity where noted
//!
//! Division is exposed twice: [`BigUnsigned::div_rem`] reports a zero
//! divisor explicitly, while the `/` and `%` operators panic on one, the
//! same way the native integer operators do.

use crate::primitives::bignum::BigUnsigned;

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};

impl<const W: usize> PartialEq for BigUnsigned<W> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.words[..self.len] == other.words[..other.len]
    }
}

impl<const W: usize> Eq for BigUnsigned<W> {}

/// Magnitude comparison: first by significant-word count, then from the
/// most significant word downward.
impl<const W: usize> Ord for BigUnsigned<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.len != other.len {
            return self.len.cmp(&other.len);
        }

        for i in (0..self.len).rev() {
            if self.words[i] != other.words[i] {
                return self.words[i].cmp(&other.words[i]);
            }
        }

        Ordering::Equal
    }
}

impl<const W: usize> PartialOrd for BigUnsigned<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Addition modulo 2³²ᵂ.
///
/// A carry out of the most significant word is dropped.
impl<const W: usize> Add for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;
        let top = self.len.max(rhs.len);
        let mut carry = 0u64;
        let mut i = 0;

        while (i < top || carry != 0) && i < W {
            let mut sum = carry;
            if i < self.len {
                sum += self.words[i] as u64;
            }
            if i < rhs.len {
                sum += rhs.words[i] as u64;
            }
            out.words[i] = sum as u32;
            carry = sum >> 32;
            i += 1;
        }

        out.len = i.max(1);
        out.normalize();
        out
    }
}

/// Saturating subtraction: a minuend smaller than the subtrahend yields
/// zero. Negative values are never representable; callers needing a
/// signed difference must compare first. The modular-inverse recurrence
/// depends on exactly this collapse.
impl<const W: usize> Sub for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn sub(self, rhs: Self) -> Self::Output {
        if self < rhs {
            return Self::ZERO;
        }

        let mut out = Self::ZERO;
        let mut borrow = 0i64;

        for i in 0..self.len {
            let mut diff = self.words[i] as i64 - borrow;
            if i < rhs.len {
                diff -= rhs.words[i] as i64;
            }

            if diff < 0 {
                diff += 1i64 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out.words[i] = diff as u32;
        }

        out.len = self.len;
        out.normalize();
        out
    }
}

/// Logical left shift by a bit count.
///
/// Bits shifted past the fixed capacity are dropped.
impl<const W: usize> Shl<usize> for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn shl(self, shift: usize) -> Self::Output {
        if shift == 0 || self.is_zero() {
            return self;
        }

        let word_shift = shift / 32;
        let bit_shift = shift % 32;

        if word_shift >= W {
            return Self::ZERO;
        }

        let mut out = Self::ZERO;

        if bit_shift == 0 {
            for i in 0..self.len {
                if i + word_shift < W {
                    out.words[i + word_shift] = self.words[i];
                }
            }
        } else {
            let mut carry = 0u64;
            for i in 0..self.len {
                if i + word_shift >= W {
                    break;
                }
                let wide = ((self.words[i] as u64) << bit_shift) | carry;
                out.words[i + word_shift] = wide as u32;
                carry = wide >> 32;
            }
            if self.len + word_shift < W && carry != 0 {
                out.words[self.len + word_shift] = carry as u32;
            }
        }

        out.len = (self.len + word_shift + (bit_shift != 0) as usize).min(W);
        out.normalize();
        out
    }
}

/// Logical right shift by a bit count.
///
/// Shifts past the current magnitude yield zero.
impl<const W: usize> Shr<usize> for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn shr(self, shift: usize) -> Self::Output {
        if shift == 0 || self.is_zero() {
            return self;
        }

        let word_shift = shift / 32;
        let bit_shift = shift % 32;

        if word_shift >= self.len {
            return Self::ZERO;
        }

        let mut out = Self::ZERO;
        let kept = self.len - word_shift;

        for i in 0..kept {
            out.words[i] = self.words[i + word_shift];
        }

        if bit_shift > 0 {
            for i in 0..kept {
                out.words[i] >>= bit_shift;
                if i + 1 < kept {
                    // low bits of the next (still unshifted) word
                    out.words[i] |=
                        (self.words[i + 1 + word_shift] & ((1u32 << bit_shift) - 1))
                            << (32 - bit_shift);
                }
            }
        }

        out.len = kept;
        out.normalize();
        out
    }
}

/// Schoolbook multiplication modulo 2³²ᵂ.
///
/// The result is accumulated into `min(len₁ + len₂, W)` words; high-order
/// words of a wider true product are dropped. Callers multiplying values
/// near the capacity must account for this (the modular layer keeps its
/// operands below half the capacity for that reason).
impl<const W: usize> Mul for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;

        for i in 0..self.len {
            let mut carry = 0u64;
            for j in 0..rhs.len {
                let k = i + j;
                if k >= W {
                    break;
                }
                let wide = self.words[i] as u64 * rhs.words[j] as u64
                    + out.words[k] as u64
                    + carry;
                out.words[k] = wide as u32;
                carry = wide >> 32;
            }

            let k = i + rhs.len;
            if carry != 0 && k < W {
                out.words[k] = carry as u32;
            }
        }

        out.len = (self.len + rhs.len).min(W);
        out.normalize();
        out
    }
}

impl<const W: usize> BigUnsigned<W> {
    /// Combined quotient and remainder.
    ///
    /// Returns `None` for a zero divisor. Otherwise:
    /// - dividend < divisor yields `(0, dividend)`
    /// - divisor one yields `(dividend, 0)`
    /// - a single-word divisor takes a fast path dividing word by word
    ///   through a 64-bit accumulator, most significant word first
    /// - the general case runs restoring binary long division over the
    ///   dividend bits, most significant first
    ///
    /// The general case is O(bit length × word count) and dominates the
    /// cost of every modular reduction above it.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self < divisor {
            return Some((Self::ZERO, *self));
        }
        if divisor.is_one() {
            return Some((*self, Self::ZERO));
        }

        if divisor.len == 1 {
            let single = divisor.words[0] as u64;
            let mut quotient = Self::ZERO;
            let mut rem = 0u64;

            for i in (0..self.len).rev() {
                let acc = (rem << 32) | self.words[i] as u64;
                quotient.words[i] = (acc / single) as u32;
                rem = acc % single;
            }

            quotient.len = self.len;
            quotient.normalize();

            let mut remainder = Self::ZERO;
            remainder.words[0] = rem as u32;
            return Some((quotient, remainder));
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        for i in (0..self.bit_len()).rev() {
            remainder = remainder << 1;
            if self.bit(i) {
                remainder.words[0] |= 1;
            }

            if remainder >= *divisor {
                remainder = remainder - *divisor;
                quotient.set_bit(i);
            }
        }

        quotient.normalize();
        remainder.normalize();
        Some((quotient, remainder))
    }
}

/// Integer division producing the quotient.
///
/// # Panics
/// Panics on a zero divisor; use [`BigUnsigned::div_rem`] to handle that
/// case without panicking.
impl<const W: usize> Div for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn div(self, rhs: Self) -> Self::Output {
        let (quotient, _) = self.div_rem(&rhs).expect("division by zero");
        quotient
    }
}

/// Integer division producing the remainder.
///
/// # Panics
/// Panics on a zero divisor; use [`BigUnsigned::div_rem`] to handle that
/// case without panicking.
impl<const W: usize> Rem for BigUnsigned<W> {
    type Output = BigUnsigned<W>;

    fn rem(self, rhs: Self) -> Self::Output {
        let (_, remainder) = self.div_rem(&rhs).expect("division by zero");
        remainder
    }
}
