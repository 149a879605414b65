//! Digit-by-digit operand accumulation.

/// The operand currently being typed, kept as display text.
///
/// The text always parses as a decimal number under construction: digits with
/// at most one `.`, never empty. Negative values only ever appear through
/// [`Operand::set_value`] when a calculation result is written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand(String);

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    /// The initial operand, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// An operand started fresh from a single digit key.
    pub fn from_digit(digit: char) -> Self {
        Self(digit.to_string())
    }

    /// An operand started fresh from the decimal point key.
    pub fn start_decimal() -> Self {
        Self("0.".to_string())
    }

    /// Append a digit, replacing a lone leading `"0"` instead of extending it.
    pub fn push_digit(&mut self, digit: char) {
        if self.0 == "0" {
            self.0 = digit.to_string();
        } else {
            self.0.push(digit);
        }
    }

    /// Append the decimal point. No-op if the operand already has one.
    pub fn push_decimal_point(&mut self) {
        if !self.0.contains('.') {
            self.0.push('.');
        }
    }

    /// Remove the last typed character, collapsing back to `"0"` once the
    /// final character is gone.
    pub fn backspace(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        } else {
            self.0 = "0".to_string();
        }
    }

    /// Parse the accumulated text as a number.
    pub fn parse(&self) -> Option<f64> {
        self.0.parse::<f64>().ok()
    }

    /// Overwrite the operand with a computed value.
    pub fn set_value(&mut self, value: f64) {
        self.0 = value.to_string();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut operand = Operand::zero();
        operand.push_digit('7');
        assert_eq!(operand.as_str(), "7");
        operand.push_digit('0');
        assert_eq!(operand.as_str(), "70");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut operand = Operand::from_digit('3');
        operand.push_decimal_point();
        operand.push_digit('1');
        operand.push_decimal_point();
        operand.push_digit('4');
        assert_eq!(operand.as_str(), "3.14");
    }

    #[test]
    fn test_start_decimal_gets_leading_zero() {
        let operand = Operand::start_decimal();
        assert_eq!(operand.as_str(), "0.");
        assert_eq!(operand.parse(), Some(0.0));
    }

    #[test]
    fn test_backspace_collapses_to_zero() {
        let mut operand = Operand::from_digit('4');
        operand.push_digit('2');
        operand.backspace();
        assert_eq!(operand.as_str(), "4");
        operand.backspace();
        assert_eq!(operand.as_str(), "0");
        operand.backspace();
        assert_eq!(operand.as_str(), "0");
    }

    #[test]
    fn test_set_value_uses_shortest_form() {
        let mut operand = Operand::zero();
        operand.set_value(53.0);
        assert_eq!(operand.as_str(), "53");
        operand.set_value(2.5);
        assert_eq!(operand.as_str(), "2.5");
        operand.set_value(-2.0);
        assert_eq!(operand.as_str(), "-2");
    }

    #[test]
    fn test_trailing_decimal_point_parses() {
        let mut operand = Operand::from_digit('5');
        operand.push_decimal_point();
        assert_eq!(operand.parse(), Some(5.0));
    }
}
