//! Conversions between `BigUnsigned` and 64-bit integers

use crate::primitives::bignum::BigUnsigned;

/// Converts a `u64` into a `BigUnsigned`.
///
/// The value occupies the two least significant words; all higher words
/// are zero.
impl<const W: usize> From<u64> for BigUnsigned<W> {
    fn from(value: u64) -> Self {
        let mut out = Self::ZERO;
        out.words[0] = value as u32;

        let high = (value >> 32) as u32;
        if high != 0 {
            out.words[1] = high;
            out.len = 2;
        }

        out
    }
}

/// Attempts to convert a `BigUnsigned` into a `u64`.
///
/// The conversion succeeds only if every word above the two least
/// significant ones is zero.
impl<const W: usize> TryFrom<BigUnsigned<W>> for u64 {
    type Error = ();

    fn try_from(value: BigUnsigned<W>) -> Result<Self, Self::Error> {
        if value.len > 2 {
            return Err(());
        }

        let low = value.words[0] as u64;
        let high = if value.len > 1 { value.words[1] as u64 } else { 0 };

        Ok((high << 32) | low)
    }
}
