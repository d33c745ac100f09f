// ============================================================================
// Format Engine
// Standard-specifier and custom-pattern rendering for digit values
// ============================================================================

use super::errors::{FormatError, FormatResult};
use super::locale::Locale;
use crate::digit::Base100Digit;

impl Base100Digit {
    /// Render the digit with an optional format string and an explicit
    /// locale. This is the primitive formatting operation; everything else
    /// wraps it.
    ///
    /// `None` or an empty string selects the default two-digit zero-padded
    /// decimal form, which is identical under every locale.
    ///
    /// # Errors
    /// - `UnsupportedSpecifier` for the round-trip family (`r`/`R`).
    /// - `Malformed` for format strings the engine rejects.
    pub fn format_with(self, format: Option<&str>, locale: &Locale) -> FormatResult<String> {
        format_value(self.value(), format, locale)
    }

    /// Render with the ambient current locale, re-read on every call.
    pub fn to_string_formatted(self, format: Option<&str>) -> FormatResult<String> {
        self.format_with(format, &Locale::current())
    }

    /// Render the default two-digit form under an explicit locale.
    ///
    /// The default form carries no locale-sensitive symbols, so this never
    /// fails; the locale parameter exists for call-site symmetry with
    /// [`format_with`](Self::format_with).
    pub fn to_string_with_locale(self, _locale: &Locale) -> String {
        format!("{:02}", self.value())
    }
}

/// Format a byte value with an optional .NET-style numeric format string.
pub fn format_value(value: u8, format: Option<&str>, locale: &Locale) -> FormatResult<String> {
    let format = match format {
        None | Some("") => return Ok(format!("{:02}", value)),
        Some(format) => format,
    };

    let mut chars = format.chars();
    let first = chars.next().expect("format is non-empty");
    let rest = chars.as_str();

    // Standard specifier: one letter plus an optional 1-2 digit precision.
    if first.is_ascii_alphabetic() && rest.len() <= 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
        let precision = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<usize>().expect("rest is all digits"))
        };
        return format_standard(value, first, precision, locale, format);
    }

    format_custom(value, format, locale)
}

// ============================================================================
// Standard Specifiers
// ============================================================================

fn format_standard(
    value: u8,
    specifier: char,
    precision: Option<usize>,
    locale: &Locale,
    format: &str,
) -> FormatResult<String> {
    match specifier.to_ascii_lowercase() {
        // Decimal: zero-pad to the requested minimum width.
        'd' => Ok(format!("{:0width$}", value, width = precision.unwrap_or(1))),

        // Fixed-point: no grouping.
        'f' => Ok(fixed(&value.to_string(), precision.unwrap_or(2), locale)),

        // Number: fixed-point with group separators.
        'n' => Ok(fixed(
            &grouped(&value.to_string(), locale),
            precision.unwrap_or(2),
            locale,
        )),

        // Currency: grouped fixed-point wrapped in the locale's symbol.
        'c' => {
            let body = fixed(&grouped(&value.to_string(), locale), precision.unwrap_or(2), locale);
            Ok(format!(
                "{}{}{}",
                locale.currency.prefix, body, locale.currency.suffix
            ))
        },

        // Percent: value scaled by 100, grouped, wrapped in the percent sign.
        'p' => {
            let scaled = (value as u32 * 100).to_string();
            let body = fixed(&grouped(&scaled, locale), precision.unwrap_or(2), locale);
            Ok(format!(
                "{}{}{}",
                locale.percent.prefix, body, locale.percent.suffix
            ))
        },

        // Scientific: mantissa digit, decimals, three-digit signed exponent.
        'e' => Ok(scientific(value, precision.unwrap_or(6), specifier, locale)),

        // General: shortest decimal form, or scientific when the requested
        // significant digits cannot hold the value.
        'g' => Ok(general(value, precision, locale)),

        // Hexadecimal: case follows the specifier.
        'x' => {
            let width = precision.unwrap_or(1);
            if specifier == 'X' {
                Ok(format!("{:0width$X}", value, width = width))
            } else {
                Ok(format!("{:0width$x}", value, width = width))
            }
        },

        // Round-trip is deliberately unsupported for this type.
        'r' => Err(FormatError::UnsupportedSpecifier(specifier)),

        _ => Err(FormatError::Malformed(format.to_string())),
    }
}

/// Append `decimals` fractional zeros behind an already-rendered integer
/// part. The digit is always integral, so the fraction is all zeros.
fn fixed(integer_part: &str, decimals: usize, locale: &Locale) -> String {
    if decimals == 0 {
        integer_part.to_string()
    } else {
        format!(
            "{}{}{}",
            integer_part,
            locale.decimal_separator,
            "0".repeat(decimals)
        )
    }
}

/// Insert the locale's group separator every three digits from the right.
fn grouped(digits: &str, locale: &Locale) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() * 2);
    for (index, byte) in bytes.iter().enumerate() {
        let remaining = bytes.len() - index;
        if index > 0 && remaining % 3 == 0 {
            out.push_str(locale.group_separator);
        }
        out.push(*byte as char);
    }
    out
}

/// Round a decimal digit string to `keep` significant digits, half-up.
/// Returns the kept digits and the exponent adjustment from any carry.
fn round_significant(digits: &[u8], keep: usize) -> (Vec<u8>, i32) {
    let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
    while kept.len() < keep {
        kept.push(0);
    }
    let mut exponent_bump = 0;
    if digits.len() > keep && digits[keep] >= 5 {
        let mut index = kept.len();
        loop {
            if index == 0 {
                kept.insert(0, 1);
                kept.pop();
                exponent_bump += 1;
                break;
            }
            index -= 1;
            if kept[index] == 9 {
                kept[index] = 0;
            } else {
                kept[index] += 1;
                break;
            }
        }
    }
    (kept, exponent_bump)
}

fn decimal_digits(value: u8) -> Vec<u8> {
    value.to_string().bytes().map(|b| b - b'0').collect()
}

fn scientific(value: u8, precision: usize, specifier: char, locale: &Locale) -> String {
    let digits = decimal_digits(value);
    let exponent = digits.len() as i32 - 1;
    let (kept, bump) = round_significant(&digits, precision + 1);
    let exponent = exponent + bump;

    let mut out = String::new();
    out.push((b'0' + kept[0]) as char);
    if precision > 0 {
        out.push_str(locale.decimal_separator);
        for digit in &kept[1..] {
            out.push((b'0' + digit) as char);
        }
    }
    out.push(if specifier == 'E' { 'E' } else { 'e' });
    out.push_str(&format!("+{:03}", exponent));
    out
}

fn general(value: u8, precision: Option<usize>, locale: &Locale) -> String {
    let digits = decimal_digits(value);
    match precision {
        // Zero or absent precision means "shortest".
        None | Some(0) => value.to_string(),
        Some(p) if p >= digits.len() => value.to_string(),
        Some(p) => {
            // Too few significant digits: fall back to compact scientific
            // with a two-digit exponent.
            let exponent = digits.len() as i32 - 1;
            let (kept, bump) = round_significant(&digits, p);
            let exponent = exponent + bump;
            let mut out = String::new();
            out.push((b'0' + kept[0]) as char);
            let tail: Vec<u8> = kept[1..]
                .iter()
                .copied()
                .rev()
                .skip_while(|d| *d == 0)
                .collect();
            if !tail.is_empty() {
                out.push_str(locale.decimal_separator);
                for digit in tail.iter().rev() {
                    out.push((b'0' + digit) as char);
                }
            }
            out.push_str(&format!("E+{:02}", exponent));
            out
        },
    }
}

// ============================================================================
// Custom Patterns
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// `0` (forced) or `#` (optional) digit placeholder.
    Placeholder(char),
    /// Decimal point (first unquoted `.`).
    DecimalPoint,
    /// Group separator activation (`,` between placeholders).
    Grouping,
    /// `%`: scales the value by 100 and prints the percent sign.
    Percent,
    /// Verbatim text from quotes, escapes, or unrecognized characters.
    Literal(String),
}

fn tokenize(pattern: &str) -> FormatResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    let mut seen_decimal_point = false;

    while let Some(ch) = chars.next() {
        match ch {
            '0' | '#' => tokens.push(Token::Placeholder(ch)),
            '.' => {
                if seen_decimal_point {
                    // Additional decimal points are ignored, as the host
                    // engine of the original did.
                    continue;
                }
                seen_decimal_point = true;
                tokens.push(Token::DecimalPoint);
            },
            ',' => tokens.push(Token::Grouping),
            '%' => tokens.push(Token::Percent),
            '\'' | '"' => {
                let quote = ch;
                let mut literal = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => break,
                        Some(c) => literal.push(c),
                        None => return Err(FormatError::Malformed(pattern.to_string())),
                    }
                }
                tokens.push(Token::Literal(literal));
            },
            '\\' => match chars.next() {
                Some(escaped) => tokens.push(Token::Literal(escaped.to_string())),
                None => return Err(FormatError::Malformed(pattern.to_string())),
            },
            other => tokens.push(Token::Literal(other.to_string())),
        }
    }

    Ok(tokens)
}

fn format_custom(value: u8, pattern: &str, locale: &Locale) -> FormatResult<String> {
    let tokens = tokenize(pattern)?;

    let percent_scale = tokens.iter().filter(|t| **t == Token::Percent).count() as u32;
    let scaled: u64 = (value as u64) * 100u64.pow(percent_scale);

    let decimal_at = tokens.iter().position(|t| *t == Token::DecimalPoint);
    let (integer_tokens, fraction_tokens) = match decimal_at {
        Some(index) => (&tokens[..index], &tokens[index + 1..]),
        None => (&tokens[..], &[][..]),
    };

    let integer_section = render_integer_section(scaled, integer_tokens, locale);
    let fraction_section = render_fraction_section(fraction_tokens, locale);

    let mut out = integer_section;
    if let Some(fraction) = fraction_section {
        out.push_str(locale.decimal_separator);
        out.push_str(&fraction);
    }
    Ok(out)
}

fn render_integer_section(value: u64, tokens: &[Token], locale: &Locale) -> String {
    let placeholder_count = tokens
        .iter()
        .filter(|t| matches!(t, Token::Placeholder(_)))
        .count();

    // Within the integer section, the leftmost `0` forces zero-padding for
    // itself and every placeholder to its right.
    let first_zero = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Placeholder(c) => Some(*c),
            _ => None,
        })
        .position(|c| c == '0');
    let min_digits = first_zero.map_or(0, |index| placeholder_count - index);

    let mut digits = value.to_string();
    if value == 0 && min_digits == 0 {
        // Only `#` placeholders: zero prints nothing.
        digits.clear();
    }
    while digits.len() < min_digits {
        digits.insert(0, '0');
    }

    let grouping = tokens.iter().any(|t| *t == Token::Grouping);
    let rendered_digits = if grouping {
        grouped(&digits, locale)
    } else {
        digits
    };

    // Distribute the rendered digit string across the placeholders, right to
    // left: each placeholder takes one digit (plus any separator directly to
    // its left); the leftmost placeholder absorbs whatever remains.
    let mut chunks: Vec<String> = vec![String::new(); placeholder_count];
    if placeholder_count > 0 {
        let mut chars: Vec<char> = rendered_digits.chars().collect();
        for slot in (1..placeholder_count).rev() {
            if chars.is_empty() {
                break;
            }
            let mut chunk = String::new();
            chunk.insert(0, chars.pop().expect("non-empty"));
            while let Some(c) = chars.last() {
                if c.is_ascii_digit() {
                    break;
                }
                chunk.insert(0, chars.pop().expect("non-empty"));
            }
            chunks[slot] = chunk;
        }
        chunks[0] = chars.into_iter().collect();
    }

    let mut out = String::new();
    let mut next_chunk = chunks.into_iter();
    for token in tokens {
        match token {
            Token::Placeholder(_) => {
                out.push_str(&next_chunk.next().expect("one chunk per placeholder"));
            },
            Token::Percent => out.push_str(locale.percent_symbol),
            Token::Literal(text) => out.push_str(text),
            Token::Grouping | Token::DecimalPoint => {},
        }
    }
    out
}

/// The digit value is always integral, so every fractional digit is zero:
/// `0` placeholders print a zero, `#` placeholders print nothing. Returns
/// `None` when the whole section renders empty, which also drops the
/// decimal separator.
fn render_fraction_section(tokens: &[Token], locale: &Locale) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }

    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Placeholder('0') => out.push('0'),
            Token::Placeholder(_) => {},
            Token::Percent => out.push_str(locale.percent_symbol),
            Token::Literal(text) => out.push_str(text),
            Token::Grouping | Token::DecimalPoint => {},
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

// ============================================================================
// Tests
// ============================================================================
