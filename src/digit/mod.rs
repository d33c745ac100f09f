// ============================================================================
// Digit Module
// The base-100 digit value type and its comparison/conversion surface
// ============================================================================
//
// This module provides:
// - Base100Digit: an immutable byte-backed value constrained to 0..=99
// - DigitError: error types for construction, conversion and comparison
// - From/TryFrom impls covering the common numeric types
//
// Design principles:
// - Validation happens exactly once, at construction
// - A constructed digit is valid forever; no operation on it panics
// - One shared range check instead of per-width duplicates

mod base100_digit;
mod compare;
mod convert;
mod errors;

pub use base100_digit::Base100Digit;
pub use errors::{DigitError, DigitResult};
