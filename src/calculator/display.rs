//! Render-ready view of the calculator state.

/// What a front end needs to draw the calculator display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// The operand being typed or the last result, formatted for display.
    pub current_text: String,
    /// The pending left-hand operand followed by its operator, e.g. `"1,200 ×"`.
    /// Empty when no operation is pending.
    pub previous_text: String,
    /// Whether the display should be drawn in its error style.
    pub is_error: bool,
}

impl DisplaySnapshot {
    /// Get the text to copy to the clipboard.
    /// Separators are stripped so the copied value can be pasted as a number.
    pub fn text_for_clipboard(&self) -> String {
        self.current_text.replace(',', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text_strips_separators() {
        let snapshot = DisplaySnapshot {
            current_text: "1,234,567.5".to_string(),
            previous_text: String::new(),
            is_error: false,
        };
        assert_eq!(snapshot.text_for_clipboard(), "1234567.5");
    }
}
