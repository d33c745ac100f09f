// ============================================================================
// Digit Comparison
// Equality and ordering against optional and any-typed operands
// ============================================================================

use super::base100_digit::Base100Digit;
use super::errors::{DigitError, DigitResult};
use std::any::Any;
use std::cmp::Ordering;

// A concrete digit always sorts after an absent one.
const SORT_ORDER_AGAINST_NONE: Ordering = Ordering::Greater;

impl Base100Digit {
    // ========================================================================
    // Optional operands
    // ========================================================================

    /// Equality against a possibly-absent digit. `None` is never equal.
    #[inline]
    pub fn eq_optional(self, other: Option<Base100Digit>) -> bool {
        match other {
            Some(digit) => self == digit,
            None => false,
        }
    }

    /// Ordering against a possibly-absent digit.
    ///
    /// `None` sorts strictly before every concrete digit, so this returns
    /// `Ordering::Greater` when `other` is absent.
    #[inline]
    pub fn cmp_optional(self, other: Option<Base100Digit>) -> Ordering {
        match other {
            Some(digit) => self.cmp(&digit),
            None => SORT_ORDER_AGAINST_NONE,
        }
    }

    // ========================================================================
    // Any-typed operands
    // ========================================================================

    /// Equality against an arbitrarily-typed operand.
    ///
    /// Absent operands and operands of any other type compare not-equal;
    /// this never fails.
    pub fn eq_any(self, other: Option<&dyn Any>) -> bool {
        match other {
            Some(any) => match any.downcast_ref::<Base100Digit>() {
                Some(digit) => self == *digit,
                None => false,
            },
            None => false,
        }
    }

    /// Ordering against an arbitrarily-typed operand.
    ///
    /// Absent operands sort before every digit. Operands of any other type
    /// are a contract violation and fail with `TypeMismatch` — deliberately
    /// asymmetric with [`eq_any`](Self::eq_any), which returns `false`.
    pub fn cmp_any(self, other: Option<&dyn Any>) -> DigitResult<Ordering> {
        match other {
            Some(any) => match any.downcast_ref::<Base100Digit>() {
                Some(digit) => Ok(self.cmp(digit)),
                None => Err(DigitError::TypeMismatch),
            },
            None => Ok(SORT_ORDER_AGAINST_NONE),
        }
    }
}

// Byte-literal comparisons for ergonomics: `digit == 42` and `42 == digit`.
impl PartialEq<u8> for Base100Digit {
    #[inline]
    fn eq(&self, other: &u8) -> bool {
        self.value() == *other
    }
}

impl PartialEq<Base100Digit> for u8 {
    #[inline]
    fn eq(&self, other: &Base100Digit) -> bool {
        *self == other.value()
    }
}

// ============================================================================
// Tests
// ============================================================================
