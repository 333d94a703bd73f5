//! Fixed-capacity unsigned big-integer primitive
//!
//! This module defines the `BigUnsigned` type, a fixed-capacity unsigned
//! integer stored as base-2³² digits, used as the computational
//! foundation for every number-theoretic operation in the crate.
//!
//! `BigUnsigned` is designed as a low-level, dependency-free primitive
//! rather than a full big-integer abstraction. It provides only the
//! functionality the number-theory layer requires, with explicit
//! semantics and predictable behavior:
//! - carry-propagating addition and saturating subtraction
//! - combined word/bit shifts
//! - schoolbook multiplication
//! - restoring binary long division
//! - a positional hexadecimal codec for textual I/O
//!
//! The internal representation is least-significant word first and is
//! kept normalized (minimal significant-word count) across all
//! operations and conversions.

mod conv;
mod core;
mod hex;
mod ops;

/// Fixed-capacity unsigned integer.
///
/// This type is re-exported as the primary integer primitive.
pub use core::BigUnsigned;

/// Error produced when decoding a malformed hexadecimal string.
pub use hex::InvalidDigit;
