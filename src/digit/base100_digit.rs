// ============================================================================
// Base-100 Digit
// Immutable byte-backed value constrained to 0..=99
// ============================================================================

use super::errors::{DigitError, DigitResult};
use std::fmt;

/// A single base-100 digit.
///
/// Internally stores a `u8` that is guaranteed to be in `0..=99` for the
/// whole lifetime of the value. Construction validates; everything after
/// construction is infallible.
///
/// # Example
/// ```ignore
/// use base100::digit::Base100Digit;
///
/// let d = Base100Digit::new(42)?;
/// assert_eq!(d.value(), 42);
/// assert_eq!(d.to_string(), "42");
/// assert_eq!(Base100Digit::new(5)?.to_string(), "05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(transparent)]
pub struct Base100Digit(u8);

const MIN_BYTE_VALUE: u8 = 0;
const MAX_BYTE_VALUE: u8 = 99;

impl Base100Digit {
    /// The smallest possible digit (0).
    pub const MIN: Self = Self(MIN_BYTE_VALUE);

    /// The largest possible digit (99).
    pub const MAX: Self = Self(MAX_BYTE_VALUE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a byte value.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value is larger than 99.
    #[inline]
    pub const fn new(value: u8) -> DigitResult<Self> {
        if value > MAX_BYTE_VALUE {
            Err(DigitError::OutOfRange {
                value: value as i128,
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Create from any integer value.
    ///
    /// This is the single validation path shared by every integer width:
    /// callers widen their input to `i128` and the range check happens once.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value is negative or larger than 99.
    #[inline]
    pub const fn from_integer(value: i128) -> DigitResult<Self> {
        if value < MIN_BYTE_VALUE as i128 || value > MAX_BYTE_VALUE as i128 {
            Err(DigitError::OutOfRange { value })
        } else {
            Ok(Self(value as u8))
        }
    }

    /// Create from a floating-point value.
    ///
    /// The input is first rounded to an integral byte with ties-to-even
    /// semantics; non-finite values and values that round outside the byte
    /// range fail that step before the 0..=99 check is applied.
    ///
    /// # Errors
    /// - `NotIntegral` if the value has no integral byte representation.
    /// - `OutOfRange` if the rounded value is in 100..=255.
    pub fn from_float(value: f64) -> DigitResult<Self> {
        if !value.is_finite() {
            return Err(DigitError::NotIntegral { value });
        }
        let rounded = value.round_ties_even();
        if rounded < 0.0 || rounded > u8::MAX as f64 {
            return Err(DigitError::NotIntegral { value });
        }
        Self::from_integer(rounded as i128)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying byte value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Base100Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base100Digit({})", self.0)
    }
}

/// Default textual form: two-digit zero-padded decimal ("00".."99").
impl fmt::Display for Base100Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Base100Digit {
    type Err = DigitError;

    /// Parse from a decimal string through the validating constructor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i128 = s.trim().parse().map_err(|_| DigitError::InvalidInput)?;
        Self::from_integer(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn test_constants() {
        assert_eq!(Base100Digit::MIN.value(), 0);
        assert_eq!(Base100Digit::MAX.value(), 99);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Base100Digit::default().value(), 0);
        assert_eq!(Base100Digit::default(), Base100Digit::MIN);
    }

    #[test]
    fn test_new_rejects_values_above_99() {
        for value in 100..=u8::MAX {
            assert_eq!(
                Base100Digit::new(value),
                Err(DigitError::OutOfRange {
                    value: value as i128
                })
            );
        }
    }

    #[test]
    fn test_from_integer_rejects_negative_values() {
        assert_eq!(
            Base100Digit::from_integer(-1),
            Err(DigitError::OutOfRange { value: -1 })
        );
        assert_eq!(
            Base100Digit::from_integer(i128::MIN),
            Err(DigitError::OutOfRange { value: i128::MIN })
        );
    }

    #[test]
    fn test_from_float_rounds_ties_to_even() {
        assert_eq!(Base100Digit::from_float(42.5).unwrap().value(), 42);
        assert_eq!(Base100Digit::from_float(43.5).unwrap().value(), 44);
        assert_eq!(Base100Digit::from_float(42.4).unwrap().value(), 42);
        assert_eq!(Base100Digit::from_float(42.6).unwrap().value(), 43);
    }

    #[test]
    fn test_from_float_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Base100Digit::from_float(value),
                Err(DigitError::NotIntegral { .. })
            ));
        }
    }

    #[test]
    fn test_from_float_distinguishes_byte_overflow_from_range() {
        // Rounds inside the byte range, then fails the 0..=99 check.
        assert_eq!(
            Base100Digit::from_float(150.0),
            Err(DigitError::OutOfRange { value: 150 })
        );
        // Cannot be represented as a byte at all.
        assert!(matches!(
            Base100Digit::from_float(300.0),
            Err(DigitError::NotIntegral { .. })
        ));
        assert!(matches!(
            Base100Digit::from_float(-0.75),
            Err(DigitError::NotIntegral { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let d: Base100Digit = "42".parse().unwrap();
        assert_eq!(d.value(), 42);

        let d: Base100Digit = " 07 ".parse().unwrap();
        assert_eq!(d.value(), 7);

        assert_eq!(
            "100".parse::<Base100Digit>(),
            Err(DigitError::OutOfRange { value: 100 })
        );
        assert_eq!(
            "forty-two".parse::<Base100Digit>(),
            Err(DigitError::InvalidInput)
        );
    }

    #[test]
    fn test_debug_format() {
        let d = Base100Digit::new(7).unwrap();
        assert_eq!(format!("{:?}", d), "Base100Digit(7)");
    }

    fn hash_of<T: Hash>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn prop_every_value_in_range_constructs(value in 0u8..=99) {
            let digit = Base100Digit::new(value).unwrap();
            prop_assert_eq!(digit.value(), value);
        }

        #[test]
        fn prop_every_value_above_range_fails(value in 100u8..=255) {
            prop_assert_eq!(
                Base100Digit::new(value),
                Err(DigitError::OutOfRange { value: value as i128 })
            );
        }

        #[test]
        fn prop_hash_matches_underlying_byte(value in 0u8..=99) {
            let digit = Base100Digit::new(value).unwrap();
            prop_assert_eq!(hash_of(digit), hash_of(value));
        }

        #[test]
        fn prop_display_is_two_digit_zero_padded(value in 0u8..=99) {
            let digit = Base100Digit::new(value).unwrap();
            prop_assert_eq!(digit.to_string(), format!("{:02}", value));
        }
    }
}
