//! Conversions between `BigUnsigned` and 32-bit integers

use crate::primitives::bignum::BigUnsigned;

/// Converts a `u32` into a `BigUnsigned`.
///
/// The value occupies the least significant word; all higher words are
/// zero.
impl<const W: usize> From<u32> for BigUnsigned<W> {
    fn from(value: u32) -> Self {
        let mut out = Self::ZERO;
        out.words[0] = value;
        out
    }
}

/// Attempts to convert a `BigUnsigned` into a `u32`.
///
/// The conversion succeeds only if every word above the least significant
/// one is zero.
impl<const W: usize> TryFrom<BigUnsigned<W>> for u32 {
    type Error = ();

    fn try_from(value: BigUnsigned<W>) -> Result<Self, Self::Error> {
        if value.len > 1 {
            return Err(());
        }

        Ok(value.words[0])
    }
}
