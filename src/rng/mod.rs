//! Pseudo-random witness sampling
//!
//! This module provides the generator used to draw random Miller–Rabin
//! witnesses. It is built on a xorshift64* core and exposes an explicit,
//! caller-owned generator instance: tests seed deterministically with
//! [`WitnessRng::from_seed`], the host programs seed once from the
//! operating system at startup.
//!
//! The generator is **not** cryptographically secure and must not be
//! used for key material.

mod witness;
mod xorshift;

/// Seedable pseudo-random generator for witness selection.
pub use witness::WitnessRng;
