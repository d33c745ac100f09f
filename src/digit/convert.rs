// ============================================================================
// Digit Conversions
// Lossless widening to the numeric types, fallible narrowing back
// ============================================================================

use super::base100_digit::Base100Digit;
use super::errors::DigitError;
use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[inline]
fn cast_failure(cause: DigitError) -> DigitError {
    DigitError::Conversion(Box::new(cause))
}

// ============================================================================
// Widening (infallible)
// ============================================================================

// A digit is always 0..=99, so every numeric type can hold it.
macro_rules! impl_widening {
    ($($target:ty),* $(,)?) => {$(
        impl From<Base100Digit> for $target {
            #[inline]
            fn from(digit: Base100Digit) -> Self {
                digit.value() as $target
            }
        }
    )*};
}

impl_widening!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

impl From<Base100Digit> for Decimal {
    #[inline]
    fn from(digit: Base100Digit) -> Self {
        Decimal::from(digit.value())
    }
}

// ============================================================================
// Narrowing (fallible)
// ============================================================================

// Unlike the plain constructors, a failed cast reports `Conversion` with the
// range error attached as its cause.
macro_rules! impl_narrowing_int {
    ($($source:ty),* $(,)?) => {$(
        impl TryFrom<$source> for Base100Digit {
            type Error = DigitError;

            #[inline]
            fn try_from(value: $source) -> Result<Self, Self::Error> {
                Base100Digit::from_integer(value as i128).map_err(cast_failure)
            }
        }
    )*};
}

impl_narrowing_int!(u8, i8, u16, i16, u32, i32, u64, i64, i128, usize, isize);

impl TryFrom<u128> for Base100Digit {
    type Error = DigitError;

    #[inline]
    fn try_from(value: u128) -> Result<Self, Self::Error> {
        // Saturate so the reported rejected value keeps its sign.
        let value = i128::try_from(value).unwrap_or(i128::MAX);
        Base100Digit::from_integer(value).map_err(cast_failure)
    }
}

impl TryFrom<f32> for Base100Digit {
    type Error = DigitError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Base100Digit::from_float(value as f64).map_err(cast_failure)
    }
}

impl TryFrom<f64> for Base100Digit {
    type Error = DigitError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Base100Digit::from_float(value).map_err(cast_failure)
    }
}

impl TryFrom<Decimal> for Base100Digit {
    type Error = DigitError;

    /// Rounds to an integral value (ties to even, matching the float path)
    /// before applying the range check.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let integral = value.round().to_i128().ok_or_else(|| {
            cast_failure(DigitError::NotIntegral {
                value: value.to_f64().unwrap_or(f64::NAN),
            })
        })?;
        Base100Digit::from_integer(integral).map_err(cast_failure)
    }
}

// ============================================================================
// Unsupported targets
// ============================================================================

// These conversions fail unconditionally, independent of the digit's value.
macro_rules! impl_unsupported {
    ($($target:ty => $name:literal),* $(,)?) => {$(
        impl TryFrom<Base100Digit> for $target {
            type Error = DigitError;

            fn try_from(_digit: Base100Digit) -> Result<Self, Self::Error> {
                Err(DigitError::UnsupportedConversion { target: $name })
            }
        }
    )*};
}

impl_unsupported!(
    bool => "bool",
    char => "char",
    NaiveDateTime => "date/time",
);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn digit(value: u8) -> Base100Digit {
        Base100Digit::new(value).unwrap()
    }

    #[test]
    fn test_widening_is_lossless() {
        for value in 0u8..=99 {
            let d = digit(value);
            assert_eq!(u8::from(d), value);
            assert_eq!(i8::from(d), value as i8);
            assert_eq!(u16::from(d), value as u16);
            assert_eq!(i16::from(d), value as i16);
            assert_eq!(u32::from(d), value as u32);
            assert_eq!(i32::from(d), value as i32);
            assert_eq!(u64::from(d), value as u64);
            assert_eq!(i64::from(d), value as i64);
            assert_eq!(u128::from(d), value as u128);
            assert_eq!(i128::from(d), value as i128);
            assert_eq!(usize::from(d), value as usize);
            assert_eq!(isize::from(d), value as isize);
            assert_eq!(f32::from(d), value as f32);
            assert_eq!(f64::from(d), value as f64);
            assert_eq!(Decimal::from(d), Decimal::from(value));
        }
    }

    #[test]
    fn test_narrowing_succeeds_in_range() {
        assert_eq!(Base100Digit::try_from(42u8).unwrap().value(), 42);
        assert_eq!(Base100Digit::try_from(99i8).unwrap().value(), 99);
        assert_eq!(Base100Digit::try_from(0u64).unwrap().value(), 0);
        assert_eq!(Base100Digit::try_from(7usize).unwrap().value(), 7);
        assert_eq!(Base100Digit::try_from(55.0f64).unwrap().value(), 55);
        assert_eq!(
            Base100Digit::try_from(Decimal::new(85, 0)).unwrap().value(),
            85
        );
    }

    #[test]
    fn test_narrowing_fails_out_of_range() {
        assert!(matches!(
            Base100Digit::try_from(100u8),
            Err(DigitError::Conversion(_))
        ));
        assert!(matches!(
            Base100Digit::try_from(-1i32),
            Err(DigitError::Conversion(_))
        ));
        assert!(matches!(
            Base100Digit::try_from(u128::MAX),
            Err(DigitError::Conversion(_))
        ));
        assert!(matches!(
            Base100Digit::try_from(f64::NAN),
            Err(DigitError::Conversion(_))
        ));
        assert!(matches!(
            Base100Digit::try_from(Decimal::new(1234, 1)), // 123.4
            Err(DigitError::Conversion(_))
        ));
    }

    #[test]
    fn test_cast_failure_carries_range_error_as_cause() {
        let error = Base100Digit::try_from(500i64).unwrap_err();
        match &error {
            DigitError::Conversion(cause) => {
                assert_eq!(**cause, DigitError::OutOfRange { value: 500 });
            },
            other => panic!("expected Conversion, got {:?}", other),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_decimal_narrowing_rounds_ties_to_even() {
        assert_eq!(
            Base100Digit::try_from(Decimal::new(425, 1)).unwrap().value(), // 42.5
            42
        );
        assert_eq!(
            Base100Digit::try_from(Decimal::new(435, 1)).unwrap().value(), // 43.5
            44
        );
    }

    #[test]
    fn test_unsupported_conversions_fail_for_every_value() {
        for d in [Base100Digit::MIN, digit(42), Base100Digit::MAX] {
            assert_eq!(
                bool::try_from(d),
                Err(DigitError::UnsupportedConversion { target: "bool" })
            );
            assert_eq!(
                char::try_from(d),
                Err(DigitError::UnsupportedConversion { target: "char" })
            );
            assert_eq!(
                NaiveDateTime::try_from(d),
                Err(DigitError::UnsupportedConversion { target: "date/time" })
            );
        }
    }
}
