//! On-screen keypad and its operator highlight.

use crate::calculator::{Operator, OperatorHighlighter};
use std::cell::RefCell;
use std::rc::Rc;

/// A keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub is_operator: bool,
    pub active: bool,
}

impl Button {
    fn key(label: &'static str) -> Self {
        Self {
            label,
            is_operator: false,
            active: false,
        }
    }

    fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            is_operator: true,
            active: false,
        }
    }
}

/// The button grid, row by row.
#[derive(Clone, Debug)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Keypad {
    /// The standard four-function layout.
    pub fn standard() -> Self {
        let rows = vec![
            vec![
                Button::key("AC"),
                Button::key("DEL"),
                Button::operator(Operator::Divide),
            ],
            vec![
                Button::key("7"),
                Button::key("8"),
                Button::key("9"),
                Button::operator(Operator::Multiply),
            ],
            vec![
                Button::key("4"),
                Button::key("5"),
                Button::key("6"),
                Button::operator(Operator::Subtract),
            ],
            vec![
                Button::key("1"),
                Button::key("2"),
                Button::key("3"),
                Button::operator(Operator::Add),
            ],
            vec![Button::key("0"), Button::key("."), Button::key("=")],
        ];
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    fn operator_button_mut(&mut self, label: &str) -> Option<&mut Button> {
        self.rows
            .iter_mut()
            .flatten()
            .find(|button| button.is_operator && button.label == label)
    }

    /// Labels of the highlighted buttons.
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .flatten()
            .filter(|button| button.active)
            .map(|button| button.label)
            .collect()
    }
}

/// Highlighter that toggles buttons on a shared [`Keypad`].
pub struct KeypadHighlighter {
    keypad: Rc<RefCell<Keypad>>,
}

impl KeypadHighlighter {
    pub fn new(keypad: Rc<RefCell<Keypad>>) -> Self {
        Self { keypad }
    }
}

impl OperatorHighlighter for KeypadHighlighter {
    fn activate(&mut self, label: &str) -> bool {
        match self.keypad.borrow_mut().operator_button_mut(label) {
            Some(button) => {
                button.active = true;
                true
            }
            None => false,
        }
    }

    fn deactivate(&mut self, label: &str) {
        if let Some(button) = self.keypad.borrow_mut().operator_button_mut(label) {
            button.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_by_label() {
        let keypad = Rc::new(RefCell::new(Keypad::standard()));
        let mut highlighter = KeypadHighlighter::new(Rc::clone(&keypad));

        assert!(highlighter.activate("×"));
        assert_eq!(keypad.borrow().active_labels(), vec!["×"]);

        highlighter.deactivate("×");
        assert!(keypad.borrow().active_labels().is_empty());
    }

    #[test]
    fn test_unknown_label_not_highlighted() {
        let keypad = Rc::new(RefCell::new(Keypad::standard()));
        let mut highlighter = KeypadHighlighter::new(Rc::clone(&keypad));

        assert!(!highlighter.activate("%"));
        // Digits share no labels with operators.
        assert!(!highlighter.activate("7"));
        assert!(keypad.borrow().active_labels().is_empty());
    }
}
