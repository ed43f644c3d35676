use std::time::{Duration, Instant};

use crate::log;
use crate::timer::DeadlineTimer;
use super::display::{display_number, format_result};
use super::keypad::CalculatorKey;
use super::operator::Operator;

pub const ERROR_TEXT: &str = "Error";
pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_millis(1500);
const MAX_OPERAND_LEN: usize = 15;

/// Four-function calculator with one pending binary operation, evaluated
/// left to right.
#[derive(Clone, Debug)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    pending_operator: Option<Operator>,
    reset_on_next_input: bool,
    // Set by an operator press, cleared once the operand is edited in any way.
    awaiting_operand: bool,
    showing_error: bool,
    error_timer: DeadlineTimer,
    error_clear_delay: Duration,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_CLEAR_DELAY)
    }
}

impl Calculator {
    pub fn new(error_clear_delay: Duration) -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operator: None,
            reset_on_next_input: false,
            awaiting_operand: false,
            showing_error: false,
            error_timer: DeadlineTimer::new(),
            error_clear_delay,
        }
    }

    pub fn press(&mut self, key: CalculatorKey) {
        match key {
            CalculatorKey::Digit(c) => self.input_digit(c),
            CalculatorKey::Operator(op) => self.choose_operator(op),
            CalculatorKey::Equals => self.evaluate(),
            CalculatorKey::Clear => self.clear(),
            CalculatorKey::Delete => self.delete_last_char(),
            CalculatorKey::Percent => self.percent(),
        }
    }

    pub fn clear(&mut self) {
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.pending_operator = None;
        self.reset_on_next_input = false;
        self.awaiting_operand = false;
        self.showing_error = false;
        self.error_timer.cancel();
    }

    /// Accepts '0'..='9' and '.', anything else is ignored.
    pub fn input_digit(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.dismiss_error();
        self.awaiting_operand = false;

        if self.reset_on_next_input {
            self.current_operand.clear();
            self.reset_on_next_input = false;
        }

        if self.current_operand == "0" && c != '.' {
            self.current_operand = c.to_string();
            return;
        }
        if c == '.' && self.current_operand.contains('.') {
            return;
        }
        if self.current_operand.len() >= MAX_OPERAND_LEN {
            return;
        }
        if c == '.' && self.current_operand.is_empty() {
            self.current_operand.push('0');
        }

        self.current_operand.push(c);
    }

    pub fn choose_operator(&mut self, op: Operator) {
        self.dismiss_error();

        if self.current_operand.is_empty() {
            return;
        }

        // No second operand typed yet: swap the operator instead of evaluating.
        if self.pending_operator.is_some() && self.awaiting_operand {
            self.pending_operator = Some(op);
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
            if self.showing_error {
                return;
            }
        }

        self.pending_operator = Some(op);
        self.previous_operand = self.current_operand.clone();
        self.reset_on_next_input = true;
        self.awaiting_operand = true;
    }

    pub fn evaluate(&mut self) {
        self.dismiss_error();
        self.compute();
    }

    pub fn delete_last_char(&mut self) {
        self.dismiss_error();

        if self.current_operand == "0" {
            return;
        }
        self.awaiting_operand = false;
        self.current_operand.pop();
        if self.current_operand.is_empty() || self.current_operand == "-" {
            self.current_operand = "0".to_string();
        }
    }

    pub fn percent(&mut self) {
        self.dismiss_error();

        let Ok(current) = self.current_operand.parse::<f64>() else {
            return;
        };
        self.current_operand = format_result(current / 100.0);
        self.awaiting_operand = false;
    }

    /// Runs the scheduled auto-clear if it is due. Returns `true` when the
    /// error display was cleared.
    pub fn poll_auto_clear(&mut self, now: Instant) -> bool {
        if self.error_timer.fire_if_due(now) {
            self.clear();
            return true;
        }
        false
    }

    pub fn time_until_auto_clear(&self, now: Instant) -> Option<Duration> {
        self.error_timer.remaining(now)
    }

    pub fn is_error(&self) -> bool {
        self.showing_error
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Main display line.
    pub fn display_text(&self) -> String {
        if self.showing_error {
            return ERROR_TEXT.to_string();
        }
        display_number(&self.current_operand)
    }

    /// Secondary line showing the buffered operand and operator, if any.
    pub fn history_text(&self) -> String {
        match self.pending_operator {
            Some(op) => format!("{} {}", display_number(&self.previous_operand), op.symbol()),
            None => String::new(),
        }
    }

    fn compute(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        let (Ok(lhs), Ok(rhs)) = (
            self.previous_operand.parse::<f64>(),
            self.current_operand.parse::<f64>(),
        ) else {
            return;
        };

        match op.apply(lhs, rhs) {
            Some(result) if result.is_finite() => {
                self.current_operand = format_result(result);
                self.previous_operand.clear();
                self.pending_operator = None;
                self.reset_on_next_input = true;
                self.awaiting_operand = false;
            }
            _ => self.show_error(),
        }
    }

    fn show_error(&mut self) {
        log!(
            "Calculation error: {} {} {}",
            self.previous_operand,
            self.pending_operator.map(|op| op.symbol()).unwrap_or(""),
            self.current_operand
        );
        self.current_operand = ERROR_TEXT.to_string();
        self.previous_operand.clear();
        self.pending_operator = None;
        self.reset_on_next_input = false;
        self.awaiting_operand = false;
        self.showing_error = true;
        self.error_timer.arm(Instant::now(), self.error_clear_delay);
    }

    /// Any new action while the error is shown supersedes the pending auto-clear.
    fn dismiss_error(&mut self) {
        if self.showing_error {
            self.clear();
        }
    }
}
