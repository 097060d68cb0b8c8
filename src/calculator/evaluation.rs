//! Operand parsing and binary arithmetic.
//!
//! Operands are kept as strings while they are typed. Evaluation parses the
//! leading numeric prefix of each operand, applies the operator, and rounds
//! the result to twelve decimal places so that `0.1 + 0.2` shows as `0.3`.

use super::Operator;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Number of decimal places results are rounded to.
const ROUNDING_SCALE: f64 = 1_000_000_000_000.0;

lazy_static! {
    /// Leading numeric prefix of an operand, e.g. `"12."` in `"12.x"`.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"
    ).unwrap();
}

/// Failures that can occur while computing a pending operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// An operand did not contain a number. Not shown to the user.
    #[error("operand {0:?} is not a number")]
    InvalidOperand(String),
    /// Division by zero or a result that overflowed.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),
}

/// Parse the leading numeric prefix of an operand.
///
/// Returns `None` for strings with no leading number, such as `""`, `"-"`
/// or `"Error"`. Trailing garbage after the number is ignored.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.find(operand.trim_start())?;
    prefix.as_str().parse::<f64>().ok()
}

/// Parse both operands and apply `operation`.
///
/// The returned value is already rounded to twelve decimal places.
pub fn evaluate(previous: &str, operation: Operator, current: &str) -> Result<f64, CalcError> {
    let prev =
        parse_operand(previous).ok_or_else(|| CalcError::InvalidOperand(previous.to_string()))?;
    let curr =
        parse_operand(current).ok_or_else(|| CalcError::InvalidOperand(current.to_string()))?;

    let raw = match operation {
        Operator::Add => prev + curr,
        Operator::Subtract => prev - curr,
        Operator::Multiply => prev * curr,
        Operator::Divide => {
            if curr == 0.0 {
                return Err(CalcError::Arithmetic("division by zero"));
            }
            prev / curr
        }
    };

    if !raw.is_finite() {
        return Err(CalcError::Arithmetic("result is not finite"));
    }

    Ok(round_result(raw))
}

/// Round to twelve decimal places, halves toward positive infinity.
///
/// Values too large to scale have no fractional digits left to round and are
/// returned unchanged.
fn round_result(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / ROUNDING_SCALE
}

/// Format a computed value as an operand string.
///
/// Never uses exponent notation and never produces `"-0"`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
