//! Column descriptors.

use serde::Deserialize;
use serde::Serialize;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Columns define which row fields are displayed and searched, their header
/// label, alignment, and whether a header click may sort by them.
///
/// # Examples
///
/// ```
/// use tableview_lib::model::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("price", "Price").align(Alignment::Right).sortable(),
///     Column::new("notes", "Notes"),
/// ];
/// assert!(columns[1].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Row field this column displays. Unique within a dataset.
    pub key: String,
    /// Header text
    pub label: String,
    /// Horizontal alignment
    #[serde(default)]
    pub align: Alignment,
    /// Whether this column is sortable
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a left-aligned, non-sortable column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Alignment::Left,
            sortable: false,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Only sortable columns respond to
    /// [`TableView::toggle_sort`](crate::view::TableView::toggle_sort).
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
