//! User-driven view parameters.

use crate::query::PageSize;
use crate::query::SortBy;
use crate::selection::Selection;

/// The mutable parameters that decide which rows are visible.
///
/// Only [`TableView`](super::TableView) writes to it; hosts read it through
/// [`TableView::state`](super::TableView::state).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Current search text. Empty means no filter.
    pub keyword: String,
    /// Active sort. `None` is natural order.
    pub sort: Option<SortBy>,
    /// 1-based page, kept within `1..=total_pages` after every change.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: PageSize,
    /// Checked row ids.
    pub selection: Selection,
}

impl ViewState {
    /// Creates the initial state for the given page size.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            keyword: String::new(),
            sort: None,
            current_page: 1,
            page_size,
            selection: Selection::new(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::All)
    }
}
