//! Inspection state for the requirement detail panel.
//!
//! At most one requirement is open at a time. Selecting while another item is
//! open replaces it directly; there is no history.

use super::domain::RequirementResult;
use super::evidence;
use serde::Serialize;

/// A requirement result with its display evidence already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedItem {
    pub result: RequirementResult,
    pub display_evidence: String,
}

impl ResolvedItem {
    pub fn resolve(result: RequirementResult) -> Self {
        let display_evidence =
            evidence::resolve(result.evidence.as_deref(), result.reason.as_deref());
        Self {
            result,
            display_evidence,
        }
    }

    pub fn status_label(&self) -> &str {
        self.result.status.label()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(ResolvedItem),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Select(RequirementResult),
    Dismiss,
}

impl SelectionState {
    pub fn reduce(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Select(result) => Self::Open(ResolvedItem::resolve(result)),
            SelectionEvent::Dismiss => Self::Closed,
        }
    }

    pub fn select(&mut self, result: RequirementResult) {
        self.apply(SelectionEvent::Select(result));
    }

    pub fn dismiss(&mut self) {
        self.apply(SelectionEvent::Dismiss);
    }

    pub fn open_item(&self) -> Option<&ResolvedItem> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    fn apply(&mut self, event: SelectionEvent) {
        let current = std::mem::take(self);
        *self = current.reduce(event);
    }
}
