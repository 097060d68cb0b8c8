//! The calculator state machine.

use std::time::Duration;

use super::Operator;
use super::display::DisplaySnapshot;
use super::evaluation::{CalcError, evaluate, format_result};
use super::format::format_operand;
use super::highlight::{ActiveOperator, OperatorHighlighter};
use super::input::Input;
use super::scheduler::{DeferredTask, Scheduler};

/// Operand shown after an arithmetic error.
pub const ERROR_MARKER: &str = "Error";

/// Default delay before the display is reset after an error.
pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// A four-function calculator holding at most one pending operation.
///
/// Every method runs to completion and leaves the state consistent. Failures
/// are never returned to the caller; an arithmetic error shows up as the
/// [`ERROR_MARKER`] operand with `is_error` set, and schedules an automatic
/// [`clear`](Self::clear).
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_display: bool,
    is_error: bool,
    active_operator: ActiveOperator,
    scheduler: Box<dyn Scheduler>,
    error_clear_delay: Duration,
}

impl Calculator {
    /// Create a calculator in its cleared state.
    pub fn new(scheduler: impl Scheduler + 'static) -> Self {
        let mut calculator = Self {
            current_operand: String::new(),
            previous_operand: String::new(),
            operation: None,
            should_reset_display: false,
            is_error: false,
            active_operator: ActiveOperator::default(),
            scheduler: Box::new(scheduler),
            error_clear_delay: DEFAULT_ERROR_CLEAR_DELAY,
        };
        calculator.clear();
        calculator
    }

    /// Set the delay before the automatic clear after an error.
    pub fn with_error_clear_delay(mut self, delay: Duration) -> Self {
        self.error_clear_delay = delay;
        self
    }

    /// Attach an observer for the active-operator highlight.
    pub fn with_highlighter(mut self, highlighter: impl OperatorHighlighter + 'static) -> Self {
        self.active_operator.set_highlighter(Box::new(highlighter));
        self
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// The operator currently highlighted, if any.
    pub fn active_operator(&self) -> Option<Operator> {
        self.active_operator.get()
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.should_reset_display = false;
        self.is_error = false;
        self.active_operator.clear();
    }

    /// Remove the last typed character.
    ///
    /// Does nothing on `"0"` or when a result is on display.
    pub fn delete_last_char(&mut self) {
        if self.current_operand == "0" || self.should_reset_display {
            return;
        }

        self.current_operand.pop();
        if self.current_operand.is_empty() || self.current_operand == "-" {
            self.current_operand = "0".to_string();
        }
        self.is_error = false;
    }

    /// Append a digit to the current operand.
    ///
    /// A `.` is treated as [`append_decimal`](Self::append_decimal); any
    /// other non-digit is ignored.
    pub fn append_digit(&mut self, digit: char) {
        if digit == '.' {
            self.append_decimal();
            return;
        }
        if !digit.is_ascii_digit() {
            tracing::debug!("Ignoring non-digit input {:?}", digit);
            return;
        }

        if self.should_reset_display {
            self.current_operand.clear();
            self.should_reset_display = false;
        }

        if self.current_operand == "0" {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit);
        }
        self.is_error = false;
    }

    /// Append a decimal point unless the operand already has one.
    pub fn append_decimal(&mut self) {
        if self.should_reset_display {
            self.current_operand = "0".to_string();
            self.should_reset_display = false;
        }

        if self.current_operand.contains('.') {
            return;
        }
        self.current_operand.push('.');
        self.is_error = false;
    }

    /// Commit `operation` with the current operand as its left-hand side.
    ///
    /// A pending operation is computed first, so `3 + 4 +` shows `7`.
    /// Choosing `−` on a bare `0` starts typing a negative number instead.
    pub fn choose_operation(&mut self, operation: Operator) {
        if self.current_operand.is_empty() && operation != Operator::Subtract {
            return;
        }

        if self.current_operand == "0" && operation == Operator::Subtract {
            self.current_operand = "-".to_string();
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
        }

        self.operation = Some(operation);
        self.previous_operand = self.current_operand.clone();
        self.should_reset_display = true;
        self.active_operator.set(operation);
    }

    /// Evaluate the pending operation, if there is one.
    pub fn compute(&mut self) {
        let Some(operation) = self.operation else {
            return;
        };

        match evaluate(&self.previous_operand, operation, &self.current_operand) {
            Ok(value) => {
                tracing::debug!(
                    "{} {} {} = {}",
                    self.previous_operand,
                    operation,
                    self.current_operand,
                    value
                );
                self.current_operand = format_result(value);
                self.operation = None;
                self.previous_operand.clear();
                self.should_reset_display = true;
                self.active_operator.clear();
            }
            Err(CalcError::InvalidOperand(operand)) => {
                tracing::debug!("Skipping compute, operand {:?} is not a number", operand);
            }
            Err(err @ CalcError::Arithmetic(_)) => {
                tracing::debug!("{}", err);
                self.show_error();
            }
        }
    }

    /// Enter the error state and schedule the automatic reset.
    pub fn show_error(&mut self) {
        self.current_operand = ERROR_MARKER.to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.should_reset_display = true;
        self.is_error = true;
        self.active_operator.clear();

        self.scheduler
            .run_after(self.error_clear_delay, DeferredTask::ClearError);
    }

    /// Run a task previously handed to the scheduler.
    pub fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::ClearError => {
                tracing::debug!("Auto-clearing after error");
                self.clear();
            }
        }
    }

    /// Dispatch a single keypad or keyboard input.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.append_digit(digit),
            Input::Decimal => self.append_decimal(),
            Input::Operator(operation) => self.choose_operation(operation),
            Input::Equals => self.compute(),
            Input::Delete => self.delete_last_char(),
            Input::Clear => self.clear(),
        }
    }

    /// Render-ready view of the current state.
    pub fn display(&self) -> DisplaySnapshot {
        let previous_text = match self.operation {
            Some(operation) => format!(
                "{} {}",
                display_operand(&self.previous_operand),
                operation
            ),
            None => String::new(),
        };

        DisplaySnapshot {
            current_text: display_operand(&self.current_operand),
            previous_text,
            is_error: self.is_error,
        }
    }
}

fn display_operand(operand: &str) -> String {
    if operand == ERROR_MARKER {
        operand.to_string()
    } else {
        format_operand(operand)
    }
}
