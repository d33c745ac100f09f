// ============================================================================
// Format Errors
// Error types for the numeric format engine
// ============================================================================

use std::fmt;

/// Errors that can occur while rendering a digit with a format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The round-trip specifier family (`r`/`R`) is deliberately not
    /// supported for base-100 digits, independent of value and locale.
    UnsupportedSpecifier(char),
    /// The format string was rejected by the engine.
    Malformed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedSpecifier(specifier) => write!(
                f,
                "format specifier '{}' is not supported for base-100 digits",
                specifier
            ),
            FormatError::Malformed(format) => {
                write!(f, "invalid format string: '{}'", format)
            },
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
