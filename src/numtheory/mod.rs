//! Number-theoretic operations over `BigUnsigned`
//!
//! This module provides the arithmetic behind elementary RSA: modular
//! addition, multiplication and exponentiation, binary GCD and modular
//! inverse, and probabilistic primality testing.
//!
//! All functions are pure over [`crate::primitives::BigUnsigned`] values;
//! the only state anywhere in the layer is the caller-owned random
//! generator handed to the primality tests for witness selection.

mod gcd;
mod modular;
mod prime;

pub use gcd::{gcd, mod_inverse};
pub use modular::{add_mod, mul_mod, power_mod};
pub use prime::{is_prime, miller_rabin, trial_division};
