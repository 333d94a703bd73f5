//! Conversions between `BigUnsigned` and native integer types
//!
//! Widening conversions (`From`) are exact and always succeed. Narrowing
//! conversions (`TryFrom`) succeed only when every bit above the target
//! width is zero, preventing implicit truncation.

mod u32;
mod u64;
