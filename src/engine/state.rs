//! The calculator state machine.

use crate::format;
use crate::history::HistoryStore;

use super::action::{CalcAction, Operator};
use super::operand::Operand;

/// The most recently completed calculation, kept for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastCalculation {
    pub expression: String,
    pub result: String,
}

/// A state transition worth surfacing to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalcEvent {
    /// A calculation completed and was recorded.
    Completed { expression: String, result: String },
    /// A division by zero reset the calculator.
    DivisionByZero,
}

/// Chained left-to-right binary calculator.
///
/// Operands accumulate in [`Operand`] as typed; pressing an operator while
/// another is already pending evaluates the pending one first, so `2 + 3 * 4`
/// yields `20`.
#[derive(Debug, Default)]
pub struct Calculator {
    current: Operand,
    previous: String,
    operator: Option<Operator>,
    reset_input: bool,
    display_history: String,
    last_calculation: Option<LastCalculation>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one user action, recording completed calculations into
    /// `history`.
    pub fn apply(&mut self, action: CalcAction, history: &mut HistoryStore) -> Option<CalcEvent> {
        match action {
            CalcAction::Digit(digit) => {
                self.input_digit(digit);
                None
            }
            CalcAction::DecimalPoint => {
                self.input_decimal_point();
                None
            }
            CalcAction::Operator(operator) => self.apply_operator(operator, history),
            CalcAction::Equals => self.calculate(history),
            CalcAction::Backspace => {
                self.backspace();
                None
            }
            CalcAction::Percentage => {
                self.percentage();
                None
            }
            CalcAction::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Enter one digit. Starts a fresh operand after an operator or a
    /// completed calculation.
    pub fn input_digit(&mut self, digit: char) {
        if self.reset_input {
            self.current = Operand::from_digit(digit);
            self.reset_input = false;
        } else {
            self.current.push_digit(digit);
        }
    }

    /// Enter the decimal point, at most once per operand.
    pub fn input_decimal_point(&mut self) {
        if self.reset_input {
            self.current = Operand::start_decimal();
            self.reset_input = false;
        } else {
            self.current.push_decimal_point();
        }
    }

    /// Set the pending operator, first resolving an already-pending one when
    /// the user has begun a new operand. Pressing two operators in a row only
    /// swaps the pending operator.
    pub fn apply_operator(
        &mut self,
        operator: Operator,
        history: &mut HistoryStore,
    ) -> Option<CalcEvent> {
        let mut event = None;
        if self.operator.is_some() && !self.reset_input {
            event = self.calculate(history);
        }
        self.previous = self.current.as_str().to_string();
        self.operator = Some(operator);
        self.reset_input = true;
        self.display_history = format!(
            "{} {}",
            format::format_input(&self.previous),
            operator.symbol()
        );
        event
    }

    /// Resolve the pending calculation. No-op when no operator is pending or
    /// the right operand has not been entered yet.
    pub fn calculate(&mut self, history: &mut HistoryStore) -> Option<CalcEvent> {
        let operator = self.operator?;
        if self.reset_input {
            return None;
        }
        let a = self.previous.parse::<f64>().ok()?;
        let b = self.current.parse()?;

        if operator == Operator::Divide && b == 0.0 {
            self.clear();
            return Some(CalcEvent::DivisionByZero);
        }

        let expression = format!(
            "{} {} {}",
            format::format_input(&self.previous),
            operator.symbol(),
            format::format_input(self.current.as_str())
        );
        let value = operator.apply(a, b);
        let result = format::format_value(value);

        if let Err(err) = history.append(&expression, &result) {
            tracing::warn!("failed to persist history entry: {err}");
        }

        self.current.set_value(value);
        self.previous.clear();
        self.operator = None;
        self.reset_input = true;
        self.display_history.clear();
        self.last_calculation = Some(LastCalculation {
            expression: expression.clone(),
            result: result.clone(),
        });
        Some(CalcEvent::Completed { expression, result })
    }

    /// Remove the last typed character of the current operand.
    pub fn backspace(&mut self) {
        self.current.backspace();
    }

    /// Replace the current operand with a hundredth of its value.
    pub fn percentage(&mut self) {
        if let Some(value) = self.current.parse() {
            self.current.set_value(value / 100.0);
        }
    }

    /// Reset everything back to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The current operand, formatted with thousands separators.
    pub fn current_display(&self) -> String {
        format::format_input(self.current.as_str())
    }

    /// The pending `"operand operator"` line shown above the main display.
    pub fn history_display(&self) -> &str {
        &self.display_history
    }

    pub fn last_calculation(&self) -> Option<&LastCalculation> {
        self.last_calculation.as_ref()
    }

    #[cfg(test)]
    fn operand_text(&self) -> &str {
        self.current.as_str()
    }

    #[cfg(test)]
    fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }
}
