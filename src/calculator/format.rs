//! Number formatting for the display, calculation labels and history.
//!
//! All numbers shown by the calculator go through [`format_number`], so a
//! result read back from the display or from a history entry parses to
//! the same value that produced it.

/// Format a number the way the display shows it.
///
/// - Shortest decimal that round-trips, with no trailing `.0`
/// - `-0` shows as `0`
/// - `NaN`, `Infinity` and `-Infinity` for non-finite values
/// - Exponent form with an explicit sign for very large or very small
///   magnitudes (`1e+21`, `1.5e-7`)
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return s.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return format_exponent(value);
    }

    format!("{}", value)
}

/// Exponent form with the exponent sign always present.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Insert thousand separators into the integer part of a display string.
///
/// Only plain numerals are touched; exponent forms, `NaN`, `Infinity`
/// and partially typed input with parentheses are returned unchanged.
pub fn format_grouped(display: &str) -> String {
    let (sign, unsigned) = match display.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", display),
    };

    let int_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (int_part, tail) = unsigned.split_at(int_len);

    let plain_tail = tail.is_empty()
        || (tail.starts_with('.') && tail[1..].chars().all(|c| c.is_ascii_digit()));
    if int_part.is_empty() || !plain_tail {
        return display.to_string();
    }

    format!("{}{}{}", sign, format_with_separators(int_part), tail)
}

/// Group a run of ASCII digits in threes from the right.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
