//! Table rows

use std::collections::HashMap;

use serde::Serialize;

use super::CellValue;

/// One record of displayable data.
///
/// Rows hold cell values as a `HashMap<String, CellValue>` keyed by column
/// key, plus a mandatory `id`. The id is the row's identity for selection, so
/// it stays stable across filtering, sorting and paging.
///
/// # Example
///
/// ```
/// use tableview_lib::model::{CellValue, Row};
///
/// let row = Row::new("1")
///     .set("name", "Apple")
///     .set("price", 2);
///
/// assert_eq!(row.id(), "1");
/// assert_eq!(row.get("price"), Some(&CellValue::Int(2)));
/// assert_eq!(row.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    id: String,
    #[serde(flatten)]
    cells: HashMap<String, CellValue>,
}

impl Row {
    /// Creates an empty row with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    /// Sets a cell value (builder pattern).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a cell value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    /// Returns the row id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the cell at `key`, or `None` when the row has no value there.
    ///
    /// An explicit [`CellValue::Null`] is reported as `None` as well.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key).filter(|v| !v.is_missing())
    }

    /// Returns the display text of the cell at `key` (empty when missing).
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_missing() {
        let row = Row::new("1").set("a", CellValue::Null).set("b", 0);
        assert_eq!(row.get("a"), None);
        assert_eq!(row.get("b"), Some(&CellValue::Int(0)));
        assert_eq!(row.display("a"), "");
        assert_eq!(row.display("b"), "0");
    }

    #[test]
    fn test_serialize_flattens_cells() {
        let row = Row::new("7").set("name", "Pear");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"id": "7", "name": "Pear"}));
    }
}
