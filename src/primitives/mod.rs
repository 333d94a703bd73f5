//! Primitive types
//!
//! This module defines the low-level integer primitive used throughout
//! the crate.
//!
//! The single primitive is [`BigUnsigned`], a fixed-capacity unsigned
//! integer parameterized over its word count. It is intentionally minimal
//! and does not attempt to replicate a full big-integer library: the
//! capacity is a hard ceiling chosen at the type level, and arithmetic
//! that would exceed it truncates to the low-order words.
//!
//! Sized aliases are provided for the working widths the host programs
//! use. Because the modular layer computes full products before reducing,
//! a capacity must be at least twice as wide as the largest modulus it is
//! used with.

mod bignum;

pub use bignum::{BigUnsigned, InvalidDigit};

/// 512-bit engine. Supports moduli up to 256 bits.
pub type U512 = BigUnsigned<16>;

/// 2048-bit engine. Supports moduli up to 1024 bits.
pub type U2048 = BigUnsigned<64>;

/// 8192-bit engine. Supports moduli up to 4096 bits.
pub type U8192 = BigUnsigned<256>;
