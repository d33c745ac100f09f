// ============================================================================
// Locale
// Numeric formatting conventions (separators, currency, percent)
// ============================================================================

use std::cell::Cell;

/// Text placed around a formatted number, e.g. a currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Affix {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }
}

/// Numeric formatting conventions for one culture.
///
/// The engine only consumes these values; nothing here is derived from the
/// operating system. Built-in locales cover the cultures the original
/// library was exercised against, plus a culture-neutral invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47-style tag, for diagnostics only.
    pub name: &'static str,
    /// Separator between integer and fractional digits.
    pub decimal_separator: &'static str,
    /// Separator between groups of three integer digits.
    pub group_separator: &'static str,
    /// Placement of the currency symbol for the `C` specifier.
    pub currency: Affix,
    /// Placement of the percent sign for the `P` specifier.
    pub percent: Affix,
    /// The percent sign itself, substituted for `%` in custom patterns.
    pub percent_symbol: &'static str,
}

impl Locale {
    /// Culture-neutral conventions; the ambient default until changed.
    pub const INVARIANT: Self = Self {
        name: "invariant",
        decimal_separator: ".",
        group_separator: ",",
        currency: Affix::new("\u{a4}", ""),
        percent: Affix::new("", " %"),
        percent_symbol: "%",
    };

    /// English (United States)
    pub const EN_US: Self = Self {
        name: "en-US",
        decimal_separator: ".",
        group_separator: ",",
        currency: Affix::new("$", ""),
        percent: Affix::new("", "%"),
        percent_symbol: "%",
    };

    /// German (Germany)
    pub const DE_DE: Self = Self {
        name: "de-DE",
        decimal_separator: ",",
        group_separator: ".",
        currency: Affix::new("", " \u{20ac}"),
        percent: Affix::new("", " %"),
        percent_symbol: "%",
    };

    /// French (France)
    pub const FR_FR: Self = Self {
        name: "fr-FR",
        decimal_separator: ",",
        group_separator: "\u{a0}",
        currency: Affix::new("", " \u{20ac}"),
        percent: Affix::new("", " %"),
        percent_symbol: "%",
    };

    /// Spanish (Spain)
    pub const ES_ES: Self = Self {
        name: "es-ES",
        decimal_separator: ",",
        group_separator: ".",
        currency: Affix::new("", " \u{20ac}"),
        percent: Affix::new("", " %"),
        percent_symbol: "%",
    };

    /// The ambient locale for the current thread.
    ///
    /// Read afresh on every formatting call that does not receive an
    /// explicit locale; it can change between calls.
    pub fn current() -> Self {
        CURRENT_LOCALE.with(Cell::get)
    }

    /// Replace the ambient locale for the current thread.
    pub fn set_current(locale: Self) {
        CURRENT_LOCALE.with(|current| current.set(locale));
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

thread_local! {
    static CURRENT_LOCALE: Cell<Locale> = const { Cell::new(Locale::INVARIANT) };
}

// ============================================================================
// Tests
// ============================================================================
