//! Witness generator
//!
//! A small xorshift64*-based generator with explicit seeding. Each call
//! site owns its instance; there is no process-wide random state, so
//! concurrent logical units of work can each carry their own generator
//! and tests stay reproducible.

use crate::os::sys_random;
use crate::primitives::BigUnsigned;
use crate::rng::xorshift::xorshift64star;

/// Pseudo-random generator for Miller–Rabin witness selection.
///
/// Not cryptographically secure.
pub struct WitnessRng {
    state: u64,
}

impl WitnessRng {
    /// Creates a generator seeded from the operating system.
    ///
    /// This is equivalent to calling [`WitnessRng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a generator using entropy provided by the operating
    /// system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 8];
        sys_random(&mut seed);

        Self::from_seed(u64::from_le_bytes(seed))
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// Equal seeds produce equal output sequences. A zero seed (invalid
    /// for the xorshift core) is replaced with a fixed nonzero constant.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        xorshift64star(&mut self.state)
    }

    /// Samples a value below `bound`.
    ///
    /// Each bit of a candidate with the bit length of `bound` is drawn
    /// independently and uniformly; a candidate that lands at or above
    /// `bound` is reduced once with `mod bound`. A zero bound yields
    /// zero.
    pub fn sample_below<const W: usize>(&mut self, bound: &BigUnsigned<W>) -> BigUnsigned<W> {
        let bits = bound.bit_len();
        let mut out = BigUnsigned::ZERO;
        let mut pool = 0u64;

        for i in 0..bits {
            if i % 64 == 0 {
                pool = self.next_u64();
            }
            if pool & 1 == 1 {
                out.set_bit(i);
            }
            pool >>= 1;
        }

        if !bound.is_zero() && out >= *bound {
            out = out % *bound;
        }

        out
    }
}

impl Default for WitnessRng {
    /// Creates a generator seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}
