//! Input classification for the interactive session.
//!
//! Determines whether a line of input is a sequence of calculator keys
//! that should be fed into the state machine.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches lines containing only calculator key characters.
    /// Allows: digits, whitespace, the decimal point, operator keys in both
    /// ASCII and typographic form, percent and equals.
    static ref KEY_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-−\*x×/÷%=]+$"
    ).unwrap();
}

/// Check if a line of input is a calculator key sequence.
///
/// Returns `true` if the line:
/// 1. Contains only calculator key characters
/// 2. Contains at least one digit, `=` or `%` (a lone operator with no
///    operand is still accepted by the state machine, but reads like a typo)
///
/// This is a fast pre-check before dispatching keys one by one.
pub fn looks_like_key_sequence(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return false;
    }

    if !KEY_SAFE_CHARS.is_match(trimmed) {
        return false;
    }

    trimmed
        .chars()
        .any(|c| c.is_ascii_digit() || c == '=' || c == '%')
}
