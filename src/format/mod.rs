// ============================================================================
// Format Module
// Locale-aware textual rendering of digit values
// ============================================================================
//
// This module provides:
// - Locale: numeric formatting conventions plus the ambient current locale
// - FormatError: error types for the format engine
// - A .NET-style numeric format interpreter (standard specifiers and custom
//   patterns) operating on the digit's byte value
//
// Design principles:
// - "Format with an explicit locale" is the primitive; the ambient-locale
//   path is a thin wrapper that re-reads thread state on every call
// - Formatting never mutates the digit and never panics; bad format strings
//   surface as FormatError

mod engine;
mod errors;
mod locale;

pub use engine::format_value;
pub use errors::{FormatError, FormatResult};
pub use locale::{Affix, Locale};
