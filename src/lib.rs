// ============================================================================
// Base100 Library
// A validated base-100 digit value type with locale-aware formatting
// ============================================================================

//! # Base100
//!
//! A single immutable value type, [`Base100Digit`], wrapping an unsigned
//! byte constrained to `0..=99`.
//!
//! ## Features
//!
//! - **Validated construction** from every common numeric type; a constructed
//!   digit is valid forever
//! - **Lossless widening** into the wider numeric types, fallible narrowing
//!   back with cause-carrying cast errors
//! - **Total ordering and equality**, including optional and any-typed
//!   comparison paths
//! - **Locale-aware formatting** with standard specifiers and custom
//!   patterns, defaulting to two-digit zero-padded decimal
//!
//! ## Example
//!
//! ```rust
//! use base100::prelude::*;
//!
//! let digit = Base100Digit::new(5).unwrap();
//! assert_eq!(digit.to_string(), "05");
//! assert_eq!(u32::from(digit), 5);
//!
//! let price = digit.format_with(Some("C2"), &Locale::EN_US).unwrap();
//! assert_eq!(price, "$5.00");
//!
//! assert!(Base100Digit::new(100).is_err());
//! ```

pub mod digit;
pub mod format;

// Re-exports for convenience
pub mod prelude {
    pub use crate::digit::{Base100Digit, DigitError, DigitResult};
    pub use crate::format::{FormatError, FormatResult, Locale};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn test_construct_compare_convert_format() {
        let low = Base100Digit::try_from(7u32).unwrap();
        let high: Base100Digit = "99".parse().unwrap();

        assert!(low < high);
        assert_eq!(low.cmp_optional(None), Ordering::Greater);
        assert_eq!(i64::from(high), 99);

        assert_eq!(low.to_string(), "07");
        assert_eq!(
            high.format_with(Some("P0"), &Locale::DE_DE).unwrap(),
            "9.900 %"
        );
        assert_eq!(
            high.format_with(Some("R"), &Locale::EN_US),
            Err(FormatError::UnsupportedSpecifier('R'))
        );
    }

    #[test]
    fn test_errors_share_a_root_cause() {
        use std::error::Error;

        let direct = Base100Digit::new(200).unwrap_err();
        let cast = Base100Digit::try_from(200u16).unwrap_err();

        // Constructor reports the range error directly; a cast wraps the
        // same root cause.
        assert_eq!(direct, DigitError::OutOfRange { value: 200 });
        let source = cast.source().expect("cast failure carries a cause");
        assert_eq!(source.to_string(), direct.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_revalidates() {
        let digit = Base100Digit::new(42).unwrap();
        let json = serde_json::to_string(&digit).unwrap();
        assert_eq!(json, "42");

        let back: Base100Digit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digit);

        assert!(serde_json::from_str::<Base100Digit>("100").is_err());
    }
}
