//! Numeral detection for the display string.
//!
//! The display is never validated while it is typed, so it may hold
//! things like `1.2.3` or `(5`. Reading it back as a number takes the
//! longest leading numeral and ignores the rest; a display with no
//! leading numeral reads as NaN.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the longest numeral at the start of the input.
    static ref LEADING_NUMERAL: Regex = Regex::new(
        r"^(?P<sign>[+-]?)(?:(?P<inf>Infinity)|(?:(?P<int>\d+)(?:\.(?P<frac>\d*))?|\.(?P<frac2>\d+))(?P<exp>[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Read the display as a number.
///
/// Leading whitespace is skipped. Trailing garbage after a numeral is
/// ignored; input without a leading numeral yields `NaN`.
pub fn parse_operand(input: &str) -> f64 {
    let trimmed = input.trim_start();

    let Some(caps) = LEADING_NUMERAL.captures(trimmed) else {
        return f64::NAN;
    };

    let negative = caps.name("sign").is_some_and(|m| m.as_str() == "-");

    if caps.name("inf").is_some() {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Rebuild as `int.frac[exp]` so bare `5.` and `.5` forms parse cleanly
    let int = caps.name("int").map_or("0", |m| m.as_str());
    let frac = caps
        .name("frac")
        .or_else(|| caps.name("frac2"))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("0");
    let exp = caps.name("exp").map_or("", |m| m.as_str());

    let normalized = format!("{}{}.{}{}", if negative { "-" } else { "" }, int, frac, exp);
    normalized.parse().unwrap_or(f64::NAN)
}

/// Check whether the whole input is a single well-formed numeral.
///
/// The calculator accepts malformed displays, but front ends use this to
/// flag them (for example `1.2.3` or unbalanced parentheses).
pub fn is_well_formed(input: &str) -> bool {
    let trimmed = input.trim();
    LEADING_NUMERAL
        .find(trimmed)
        .is_some_and(|m| m.end() == trimmed.len())
}
