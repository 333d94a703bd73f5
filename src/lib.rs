//! Number-theoretic primitives for elementary RSA
//!
//! This crate implements, from scratch, the computational kernel behind
//! textbook RSA operations: a fixed-capacity arbitrary-precision unsigned
//! integer type and the number-theory layer built on it — modular
//! exponentiation, extended-Euclid modular inverse, and Miller–Rabin
//! primality testing.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on raw throughput or constant-time guarantees. All arithmetic is
//! implemented explicitly on fixed-size word arrays, with no heap
//! allocation and no dependencies beyond the operating system entropy
//! interface.
//!
//! # Module overview
//!
//! - `primitives`
//!   The big-integer engine: [`primitives::BigUnsigned`], a fixed-capacity
//!   unsigned integer parameterized over its word count, together with its
//!   arithmetic operators, native-integer conversions, and the positional
//!   hexadecimal codec used for all textual I/O. Sized aliases
//!   ([`primitives::U512`], [`primitives::U2048`], [`primitives::U8192`])
//!   cover the common working widths.
//!
//! - `numtheory`
//!   Pure functions over `BigUnsigned` values: modular addition,
//!   multiplication and exponentiation, binary GCD, modular inverse,
//!   small-prime trial division, and the Miller–Rabin probable-prime test
//!   with deterministic small-prime witnesses.
//!
//! - `rng`
//!   A small, explicitly seeded pseudo-random generator used to draw
//!   additional Miller–Rabin witnesses. Each call site owns its generator
//!   instance, so tests can seed deterministically while the host programs
//!   seed from the operating system. This generator is **not**
//!   cryptographically secure.
//!
//! # Capacity policy
//!
//! Every `BigUnsigned<W>` holds at most `32·W` bits; this is a hard
//! ceiling, not a growable store. Arithmetic whose true result would be
//! wider is truncated to the low-order bits, exactly like the wrapping
//! behavior of the native unsigned types. The modular layer states the
//! headroom it needs from its callers (a modulus may occupy at most half
//! the capacity, so that products of reduced operands always fit).
//!
//! This crate is not intended to replace full-featured, externally audited
//! big-integer or RSA libraries; it is a small, controlled foundation for
//! primality screening, key-component inversion, and modular
//! exponentiation.

mod os;

pub mod numtheory;
pub mod primitives;
pub mod rng;
