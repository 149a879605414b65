//! Canonical number formatting for display and history records.
//!
//! Every string the calculator shows or persists goes through this module:
//! large and tiny magnitudes switch to exponential notation, everything else
//! gets thousand separators and trailing-zero trimming. History entries
//! store the formatted text, so formatting is also the persistence format.

/// Threshold above which values render in exponential notation.
const EXP_UPPER: f64 = 1e9;
/// Threshold below which non-zero values render in exponential notation.
const EXP_LOWER: f64 = 1e-6;
/// Maximum fractional digits for plain (non-exponential) rendering.
const MAX_FRACTION_DIGITS: usize = 8;

/// Format a numeric value for display.
///
/// - `|value| >= 1e9` renders as exponential with 4 fractional digits
///   (`1.5000e+9`).
/// - `0 < |value| < 1e-6` renders as exponential with 6 fractional digits.
/// - Everything else renders with thousand separators and up to 8
///   fractional digits, trailing zeros trimmed.
/// - Non-finite values render as `"0"`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    if value.abs() >= EXP_UPPER {
        return to_exponential(value, 4);
    }

    if value != 0.0 && value.abs() < EXP_LOWER {
        return to_exponential(value, 6);
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    group_thousands(trimmed)
}

/// Format a numeric string for display.
///
/// Accepts raw operand text as well as this module's own output (thousand
/// separators are stripped before parsing), so formatting is idempotent in
/// the non-exponential range. Unparseable input renders as `"0"`.
pub fn format_input(input: &str) -> String {
    let cleaned: String = input.trim().chars().filter(|&c| c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) => format_value(value),
        Err(_) => "0".to_string(),
    }
}

/// Render a value in exponential notation with an explicit exponent sign
/// (`1.5000e+9`, `2.500000e-7`).
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let raw = format!("{:.*e}", fraction_digits, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => raw,
    }
}

/// Insert thousand separators into the integer part of a plain decimal
/// string. The fractional part and sign are preserved unchanged.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
