//! Active-operator highlighting side channel.

use super::Operator;

/// Observer that owns the operator controls of a front end.
///
/// The engine calls [`activate`](Self::activate) with the label of the
/// chosen operator and [`deactivate`](Self::deactivate) with the label of the
/// one that was active before. It never touches the controls directly.
pub trait OperatorHighlighter {
    /// Highlight the control whose label equals `label`.
    ///
    /// Returns `false` if no such control exists.
    fn activate(&mut self, label: &str) -> bool;

    /// Remove the highlight from the control whose label equals `label`.
    fn deactivate(&mut self, label: &str);
}

/// Tracks which operator is highlighted and forwards changes to an optional
/// [`OperatorHighlighter`]. At most one operator is active at a time.
#[derive(Default)]
pub(crate) struct ActiveOperator {
    active: Option<Operator>,
    highlighter: Option<Box<dyn OperatorHighlighter>>,
}

impl ActiveOperator {
    pub fn set_highlighter(&mut self, highlighter: Box<dyn OperatorHighlighter>) {
        self.highlighter = Some(highlighter);
    }

    pub fn get(&self) -> Option<Operator> {
        self.active
    }

    /// Mark `operator` as the only active one.
    pub fn set(&mut self, operator: Operator) {
        self.clear();
        match self.highlighter.as_mut() {
            Some(highlighter) => {
                if highlighter.activate(operator.symbol()) {
                    self.active = Some(operator);
                } else {
                    tracing::debug!("No control labelled {} to highlight", operator);
                }
            }
            None => self.active = Some(operator),
        }
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.active.take()
            && let Some(highlighter) = self.highlighter.as_mut()
        {
            highlighter.deactivate(previous.symbol());
        }
    }
}
