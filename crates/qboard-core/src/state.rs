//! View state for the queue display
//!
//! Three named variants instead of independent booleans so illegal
//! combinations (loading + error, data + error) are unrepresentable.

use crate::error::ClientError;
use crate::models::QueueEnvelope;

/// State of the single fetch-and-render flow.
///
/// Starts in `Loading`; the one transition is driven by the fetch result and
/// both `Loaded` and `Failed` are terminal for the life of the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueueView {
    #[default]
    Loading,
    Loaded(QueueEnvelope),
    Failed(String),
}

impl QueueView {
    /// Apply the fetch outcome. Only meaningful from `Loading`; a terminal
    /// state is never overwritten.
    pub fn resolve(&mut self, result: Result<QueueEnvelope, ClientError>) {
        if !self.is_loading() {
            return;
        }
        *self = match result {
            Ok(envelope) => QueueView::Loaded(envelope),
            Err(err) => QueueView::Failed(err.view_message()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueueView::Loading)
    }

    /// Number of tasks available for display (zero unless loaded).
    pub fn task_count(&self) -> usize {
        match self {
            QueueView::Loaded(envelope) => envelope.tasks.len(),
            _ => 0,
        }
    }
}
