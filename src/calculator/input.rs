//! Keypad and keyboard input mapping.
//!
//! Translates key names (as a keyboard or a keypad button would report them)
//! into calculator inputs, and splits a typed line into a key sequence.

use super::Operator;
use lazy_static::lazy_static;
use regex::Regex;

/// A single calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Delete,
    Clear,
}

impl Input {
    /// Map a key name or keypad label to an input.
    ///
    /// Returns `None` for keys the calculator does not handle.
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(op) = Operator::from_symbol(key) {
            return Some(Self::Operator(op));
        }

        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_digit()
        {
            return Some(Self::Digit(c));
        }

        match key.to_ascii_lowercase().as_str() {
            "." => Some(Self::Decimal),
            "=" | "enter" => Some(Self::Equals),
            "backspace" | "del" | "<" => Some(Self::Delete),
            "escape" | "esc" | "c" | "ac" => Some(Self::Clear),
            _ => None,
        }
    }
}

lazy_static! {
    /// One key per match: named keys first, then single characters.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)^(backspace|escape|enter|esc|del|ac|\S)"
    ).unwrap();
}

/// Result of splitting a line into keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedKeys {
    pub inputs: Vec<Input>,
    /// Tokens that did not map to any input, in order of appearance.
    pub unknown: Vec<String>,
}

/// Split a typed line into calculator inputs.
///
/// Whitespace is skipped. Named keys (`esc`, `del`, `enter`, ...) are matched
/// case-insensitively before single characters.
pub fn parse_keys(line: &str) -> ParsedKeys {
    let mut parsed = ParsedKeys::default();
    let mut rest = line.trim_start();

    while let Some(token) = KEY_TOKEN.find(rest) {
        let key = token.as_str();
        match Input::from_key(key) {
            Some(input) => parsed.inputs.push(input),
            None => parsed.unknown.push(key.to_string()),
        }
        rest = rest[token.end()..].trim_start();
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_keys() {
        assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_key("."), Some(Input::Decimal));
        assert_eq!(Input::from_key("-"), Some(Input::Operator(Operator::Subtract)));
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Delete));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("q"), None);
        assert_eq!(Input::from_key("12"), None);
    }

    #[test]
    fn test_keypad_labels() {
        assert_eq!(Input::from_key("×"), Some(Input::Operator(Operator::Multiply)));
        assert_eq!(Input::from_key("÷"), Some(Input::Operator(Operator::Divide)));
        assert_eq!(Input::from_key("AC"), Some(Input::Clear));
        assert_eq!(Input::from_key("DEL"), Some(Input::Delete));
    }

    #[test]
    fn test_parse_line() {
        let parsed = parse_keys("12 + 3.5 =");
        assert_eq!(
            parsed.inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::Operator(Operator::Add),
                Input::Digit('3'),
                Input::Decimal,
                Input::Digit('5'),
                Input::Equals,
            ]
        );
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn test_parse_named_keys_and_unknown() {
        let parsed = parse_keys("9 del esc 4 ? 2");
        assert_eq!(
            parsed.inputs,
            vec![
                Input::Digit('9'),
                Input::Delete,
                Input::Clear,
                Input::Digit('4'),
                Input::Digit('2'),
            ]
        );
        assert_eq!(parsed.unknown, vec!["?".to_string()]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_keys("   "), ParsedKeys::default());
    }
}
