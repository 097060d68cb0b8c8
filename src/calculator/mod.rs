//! Calculator module: the keypad state machine and its helpers.
//!
//! This module provides functionality to:
//! - Accumulate digit, decimal and operator input into operands
//! - Compute the pending binary operation with rounding and error handling
//! - Format operands for display with thousand separators
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod engine;
mod evaluation;
mod format;
mod highlight;
mod input;
mod operator;
mod scheduler;

pub use clipboard::copy_to_clipboard;
pub use display::DisplaySnapshot;
pub use engine::{Calculator, DEFAULT_ERROR_CLEAR_DELAY, ERROR_MARKER};
pub use evaluation::{CalcError, evaluate, parse_operand};
pub use format::format_operand;
pub use highlight::OperatorHighlighter;
pub use input::{Input, ParsedKeys, parse_keys};
pub use operator::Operator;
pub use scheduler::{DeferredTask, ManualScheduler, Scheduler, TokioScheduler};
