//! Change notifications for the host.
//!
//! A [`TableView`](crate::view::TableView) queues one event per observable
//! state change. The host drains the queue after dispatching a user action
//! and forwards the events to its listeners.

use serde::Serialize;

use crate::query::PageSize;
use crate::query::SortBy;

/// Result of handling a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The action did not apply (unknown or non-sortable column, selection
    /// disabled, ...). Nothing changed.
    Ignored,
    /// The action was handled.
    Consumed,
}

impl EventResult {
    /// Check if the action was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// An observable change in a table's view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    /// A new dataset was loaded.
    Loaded { rows: usize },
    /// The search keyword changed.
    SearchChanged { keyword: String },
    /// The sort changed. `None` is natural order.
    SortChanged { sort: Option<SortBy> },
    /// The current page, the page size, or the page count changed.
    PageChanged {
        page: usize,
        page_size: PageSize,
        total_pages: usize,
    },
    /// Rows were checked or unchecked.
    SelectionChanged {
        added: Vec<String>,
        removed: Vec<String>,
    },
}

impl TableEvent {
    /// Short name of the event, as used in the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TableEvent::Loaded { .. } => "loaded",
            TableEvent::SearchChanged { .. } => "search_changed",
            TableEvent::SortChanged { .. } => "sort_changed",
            TableEvent::PageChanged { .. } => "page_changed",
            TableEvent::SelectionChanged { .. } => "selection_changed",
        }
    }
}
