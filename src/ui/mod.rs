pub mod keypad;
pub mod render;
pub mod terminal;

pub use keypad::{Keypad, KeypadHighlighter};
pub use terminal::{Flow, Session, run_interactive, run_keys};
