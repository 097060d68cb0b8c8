//! zcalc: a four-function keypad calculator.
//!
//! The [`calculator`] module holds the state machine and is free of any I/O
//! besides the injected [`Scheduler`](calculator::Scheduler) and
//! [`OperatorHighlighter`](calculator::OperatorHighlighter). The [`ui`] module
//! drives it from a terminal.

pub mod calculator;
pub mod config;
pub mod ui;
