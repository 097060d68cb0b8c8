//! Text rendering of the display and keypad.

use super::keypad::Keypad;
use crate::calculator::DisplaySnapshot;

/// Width of the display area in columns.
pub const DISPLAY_WIDTH: usize = 24;

const ERROR_STYLE: &str = "\x1b[31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Render the two display lines, right-aligned.
///
/// With `styled` set, an error display is drawn in red.
pub fn render_display(display: &DisplaySnapshot, styled: bool) -> String {
    let previous = right_align(&display.previous_text);
    let mut current = right_align(&display.current_text);

    if display.is_error {
        current = if styled {
            format!("{}{}{}", ERROR_STYLE, current, RESET_STYLE)
        } else {
            format!("{} !", current)
        };
    }

    format!("{}\n{}\n", previous, current)
}

/// Render the keypad grid. Highlighted operators are bracketed.
pub fn render_keypad(keypad: &Keypad) -> String {
    let mut out = String::new();
    for row in keypad.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{:^3}]", button.label)
                } else {
                    format!(" {:^3} ", button.label)
                }
            })
            .collect();
        out.push_str(cells.join("").trim_end());
        out.push('\n');
    }
    out
}

fn right_align(text: &str) -> String {
    format!("{:>width$}", text, width = DISPLAY_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::OperatorHighlighter;
    use crate::ui::keypad::KeypadHighlighter;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn snapshot(current: &str, previous: &str, is_error: bool) -> DisplaySnapshot {
        DisplaySnapshot {
            current_text: current.to_string(),
            previous_text: previous.to_string(),
            is_error,
        }
    }

    #[test]
    fn test_display_right_aligned() {
        let rendered = render_display(&snapshot("1,234", "5 +", false), false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("5 +"));
        assert!(lines[1].ends_with("1,234"));
        assert_eq!(lines[1].chars().count(), DISPLAY_WIDTH);
    }

    #[test]
    fn test_error_display() {
        let plain = render_display(&snapshot("Error", "", true), false);
        assert!(plain.trim_end().ends_with("Error !"));

        let styled = render_display(&snapshot("Error", "", true), true);
        assert!(styled.contains(ERROR_STYLE));
    }

    #[test]
    fn test_keypad_brackets_active_operator() {
        let keypad = Rc::new(RefCell::new(Keypad::standard()));
        KeypadHighlighter::new(Rc::clone(&keypad)).activate("+");

        let rendered = render_keypad(&keypad.borrow());
        assert!(rendered.contains("[ + ]"));
        assert!(!rendered.contains("[ × ]"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
