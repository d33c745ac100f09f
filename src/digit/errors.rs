// ============================================================================
// Digit Errors
// Error types for base-100 digit construction and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or converting a base-100 digit.
#[derive(Debug, Clone, PartialEq)]
pub enum DigitError {
    /// Input was outside the valid range 0..=99. Carries the rejected value.
    OutOfRange { value: i128 },
    /// A floating-point or decimal input could not be represented as a byte
    /// (non-finite, or rounds outside the byte range).
    NotIntegral { value: f64 },
    /// An explicit numeric cast failed. Wraps the underlying range or
    /// integral-conversion failure as its cause.
    Conversion(Box<DigitError>),
    /// Conversion to the named target type is never supported.
    UnsupportedConversion { target: &'static str },
    /// An any-typed ordering comparison received a value of the wrong type.
    TypeMismatch,
    /// Input string could not be parsed as a number.
    InvalidInput,
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitError::OutOfRange { value } => write!(
                f,
                "value {} was either too large or too small for a base-100 digit; \
                 the value has to be between 0 and 99",
                value
            ),
            DigitError::NotIntegral { value } => write!(
                f,
                "value {} cannot be represented as an integral byte",
                value
            ),
            DigitError::Conversion(cause) => {
                write!(f, "numeric cast to base-100 digit failed: {}", cause)
            },
            DigitError::UnsupportedConversion { target } => {
                write!(f, "conversion to {} is not supported", target)
            },
            DigitError::TypeMismatch => {
                write!(f, "comparison operand must be a base-100 digit")
            },
            DigitError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for DigitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigitError::Conversion(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Result type alias for digit operations
pub type DigitResult<T> = Result<T, DigitError>;
