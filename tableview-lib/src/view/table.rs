//! The table view orchestrator.

use log::debug;
use log::warn;

use super::ViewState;
use crate::config::TableConfig;
use crate::events::EventResult;
use crate::events::TableEvent;
use crate::model::Dataset;
use crate::model::Row;
use crate::query::Direction;
use crate::query::Page;
use crate::query::PageRange;
use crate::query::PageSize;
use crate::query::SortBy;
use crate::query::filter_rows;
use crate::query::paginate;
use crate::query::sort_rows;
use crate::selection::HeaderCheckState;
use crate::selection::Selection;
use crate::selection::SelectionDelta;
use crate::selection::SelectionMode;

/// What the host renders after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    /// Rows on the current page, filtered and sorted.
    pub rows: Vec<&'a Row>,
    /// Current page after clamping.
    pub current_page: usize,
    /// Number of pages (at least 1).
    pub total_pages: usize,
    /// Rows matching the keyword, across all pages.
    pub total_rows: usize,
    /// Page size in effect.
    pub page_size: PageSize,
    /// Row positions for the "1-10 of 25" label.
    pub range: PageRange,
    /// Header checkbox state for the visible rows.
    pub header: HeaderCheckState,
}

impl View<'_> {
    /// Returns `true` if the "previous page" control should be enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if the "next page" control should be enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Ids of the visible rows, in display order.
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.id()).collect()
    }
}

/// Snapshot used to decide whether a transition moved the pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageState {
    page: usize,
    page_size: PageSize,
    total_pages: usize,
}

/// A table's dataset, view state and pending change events.
///
/// Every input method is one state transition: it updates the view state,
/// re-runs filter, sort and page in that order, writes the clamped page
/// back, and queues [`TableEvent`]s for whatever changed. Nothing derived is
/// cached apart from the clamped page and page count.
///
/// # Example
///
/// ```
/// use tableview_lib::config::TableConfig;
/// use tableview_lib::events::TableEvent;
/// use tableview_lib::model::{Column, Dataset, Row};
/// use tableview_lib::view::TableView;
///
/// let dataset = Dataset::new(
///     vec![Column::new("name", "Name")],
///     vec![
///         Row::new("1").set("name", "Apple"),
///         Row::new("2").set("name", "Orange"),
///     ],
/// )
/// .unwrap();
/// let mut table = TableView::with_dataset(TableConfig::default(), dataset);
///
/// table.set_keyword("orange");
/// table.toggle_all(true);
/// table.set_keyword("");
///
/// assert_eq!(table.checked_ids(), ["2"]);
/// assert_eq!(table.view().rows.len(), 2);
/// assert!(matches!(
///     table.take_events().as_slice(),
///     [TableEvent::SearchChanged { .. }, TableEvent::SelectionChanged { .. }, TableEvent::SearchChanged { .. }]
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    config: TableConfig,
    dataset: Dataset,
    state: ViewState,
    total_pages: usize,
    events: Vec<TableEvent>,
}

impl TableView {
    /// Creates a view with no data.
    pub fn new(config: TableConfig) -> Self {
        Self::with_dataset(config, Dataset::empty())
    }

    /// Creates a view over `dataset` with default view state.
    pub fn with_dataset(config: TableConfig, dataset: Dataset) -> Self {
        let state = ViewState::new(config.default_page_size);
        let mut view = Self {
            config,
            dataset,
            state,
            total_pages: 1,
            events: Vec::new(),
        };
        view.recompute();
        view
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the current search keyword.
    pub fn keyword(&self) -> &str {
        &self.state.keyword
    }

    /// Returns the active sort.
    pub fn sort(&self) -> Option<&SortBy> {
        self.state.sort.as_ref()
    }

    /// Returns the current (clamped) page.
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Returns the number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the page size.
    pub fn page_size(&self) -> PageSize {
        self.state.page_size
    }

    /// Returns the selection.
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Returns the checked row ids, sorted.
    pub fn checked_ids(&self) -> Vec<String> {
        self.state.selection.ids()
    }

    /// Returns `true` if the row is checked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.state.selection.contains(id)
    }

    /// Drains the queued change events, oldest first.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Computes the rows to render.
    pub fn view(&self) -> View<'_> {
        let page = self.compute();
        let header = HeaderCheckState::of(&self.state.selection, page.rows.iter().map(|r| r.id()));
        let range = page.range();

        View {
            rows: page.rows,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_rows: page.total_rows,
            page_size: page.page_size,
            range,
            header,
        }
    }

    // =========================================================================
    // Dataset
    // =========================================================================

    /// Replaces the dataset and returns to the first page.
    ///
    /// The selection is kept. Checked ids that are absent from the new rows
    /// stay checked but inert.
    pub fn load(&mut self, dataset: Dataset) {
        let before = self.page_state();
        debug!("Loading {} rows", dataset.len());
        self.dataset = dataset;
        self.state.current_page = 1;
        self.events.push(TableEvent::Loaded {
            rows: self.dataset.len(),
        });
        self.refresh(before);
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Sets the search keyword.
    ///
    /// The current page is clamped to the new page count, so a page that
    /// still exists is kept. With `reset_page_on_search` the view returns to
    /// page 1 instead. Edits that only add or remove surrounding whitespace
    /// do not change the filter and emit nothing.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if keyword.trim() == self.state.keyword.trim() {
            self.state.keyword = keyword;
            return;
        }

        let before = self.page_state();
        debug!("Search keyword: {:?}", keyword);
        self.state.keyword = keyword.clone();
        if self.config.reset_page_on_search {
            self.state.current_page = 1;
        }
        self.events.push(TableEvent::SearchChanged { keyword });
        self.refresh(before);
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Sets the sort. `None` restores natural order.
    ///
    /// Any key is accepted; a key no row has leaves the order unchanged.
    pub fn set_sort(&mut self, sort: Option<SortBy>) {
        if sort == self.state.sort {
            return;
        }

        let before = self.page_state();
        debug!("Sort: {:?}", sort);
        self.state.sort = sort.clone();
        self.events.push(TableEvent::SortChanged { sort });
        self.refresh(before);
    }

    /// Header-click sort cycle for `key`: ascending, descending, then off.
    ///
    /// Clicking a different column starts over at ascending. Unknown and
    /// non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, key: &str) -> EventResult {
        let Some(column) = self.dataset.column(key) else {
            warn!("Sort requested on unknown column '{}'", key);
            return EventResult::Ignored;
        };
        if !column.sortable {
            debug!("Column '{}' is not sortable", key);
            return EventResult::Ignored;
        }

        let next = match &self.state.sort {
            Some(current) if current.key == key => match current.direction {
                Direction::Asc => Some(SortBy::desc(key)),
                Direction::Desc => None,
            },
            _ => Some(SortBy::asc(key)),
        };
        self.set_sort(next);
        EventResult::Consumed
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Moves to `page`. Out-of-range pages clamp to the nearest valid one.
    pub fn set_page(&mut self, page: usize) {
        let before = self.page_state();
        self.state.current_page = page;
        self.refresh(before);
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) -> EventResult {
        if self.state.current_page >= self.total_pages {
            return EventResult::Ignored;
        }
        self.set_page(self.state.current_page + 1);
        EventResult::Consumed
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) -> EventResult {
        if self.state.current_page <= 1 {
            return EventResult::Ignored;
        }
        self.set_page(self.state.current_page - 1);
        EventResult::Consumed
    }

    /// Changes the page size, keeping the current page where it still exists.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        if page_size == self.state.page_size {
            return;
        }
        if !self.config.page_size_options.contains(&page_size) {
            debug!("Page size {} is not one of the configured options", page_size);
        }

        let before = self.page_state();
        self.state.page_size = page_size;
        self.refresh(before);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips the checkbox of one row.
    ///
    /// In single mode checking a row unchecks every other row.
    pub fn toggle_row(&mut self, id: &str) -> EventResult {
        let delta = match self.config.selection_mode {
            SelectionMode::None => return EventResult::Ignored,
            SelectionMode::Single if !self.state.selection.contains(id) => {
                self.state.selection.replace(id)
            }
            SelectionMode::Single | SelectionMode::Multiple => self.state.selection.toggle(id),
        };
        self.push_selection(delta);
        EventResult::Consumed
    }

    /// Checks (`select == true`) or unchecks every visible row.
    ///
    /// Rows outside the current page or filter keep their state. Only
    /// available in multiple-selection mode.
    pub fn toggle_all(&mut self, select: bool) -> EventResult {
        if self.config.selection_mode != SelectionMode::Multiple {
            return EventResult::Ignored;
        }

        let visible = self.visible_ids();
        let delta = self
            .state
            .selection
            .set(visible.iter().map(String::as_str), select);
        self.push_selection(delta);
        EventResult::Consumed
    }

    /// Header checkbox click: checks all visible rows, or unchecks them when
    /// they are all checked already.
    pub fn toggle_header(&mut self) -> EventResult {
        let select = self.view().header != HeaderCheckState::Checked;
        self.toggle_all(select)
    }

    /// Shift-click: checks every visible row between the last toggled row
    /// and `id`.
    pub fn range_select(&mut self, id: &str) -> EventResult {
        if self.config.selection_mode != SelectionMode::Multiple {
            return EventResult::Ignored;
        }

        let visible = self.visible_ids();
        let visible: Vec<&str> = visible.iter().map(String::as_str).collect();
        let delta = self.state.selection.extend_to(id, &visible);
        self.push_selection(delta);
        EventResult::Consumed
    }

    /// Unchecks every row, visible or not.
    pub fn clear_selection(&mut self) {
        let delta = self.state.selection.clear();
        self.push_selection(delta);
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Runs filter, sort and page over the dataset. Order matters: paging
    /// before sorting would sort each page on its own.
    fn compute(&self) -> Page<'_> {
        let filtered = filter_rows(
            self.dataset.rows(),
            self.dataset.columns(),
            &self.state.keyword,
        );
        let sorted = sort_rows(filtered, self.state.sort.as_ref());
        paginate(sorted, self.state.current_page, self.state.page_size)
    }

    fn visible_ids(&self) -> Vec<String> {
        self.compute()
            .rows
            .iter()
            .map(|row| row.id().to_string())
            .collect()
    }

    fn page_state(&self) -> PageState {
        PageState {
            page: self.state.current_page,
            page_size: self.state.page_size,
            total_pages: self.total_pages,
        }
    }

    /// Recomputes and writes the clamped page back into the state.
    fn recompute(&mut self) {
        let page = self.compute();
        let (current_page, total_pages) = (page.current_page, page.total_pages);
        debug!(
            "Recomputed view: {} of {} rows visible, page {}/{}",
            page.rows.len(),
            page.total_rows,
            current_page,
            total_pages
        );
        self.state.current_page = current_page;
        self.total_pages = total_pages;
    }

    fn refresh(&mut self, before: PageState) {
        self.recompute();
        let after = self.page_state();
        if after != before {
            self.events.push(TableEvent::PageChanged {
                page: after.page,
                page_size: after.page_size,
                total_pages: after.total_pages,
            });
        }
    }

    fn push_selection(&mut self, delta: SelectionDelta) {
        if delta.is_empty() {
            return;
        }
        debug!("Selection: +{:?} -{:?}", delta.added, delta.removed);
        let SelectionDelta { added, removed } = delta;
        self.events
            .push(TableEvent::SelectionChanged { added, removed });
    }
}
