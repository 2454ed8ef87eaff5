//! Datasets: columns plus the canonical row order.

use std::collections::HashMap;
use std::collections::HashSet;

use log::debug;
use log::warn;

use super::CellValue;
use super::Column;
use super::Row;
use crate::error::DatasetError;

/// The data a table displays.
///
/// A dataset is set once per load by the host. Row order as supplied is the
/// canonical order: it is the natural order when no sort is active and the
/// tie-break when sorted values are equal.
///
/// Rows sharing an id are resolved first-wins: the first occurrence is kept,
/// later ones are dropped and counted in [`dropped_rows`](Self::dropped_rows).
///
/// # Example
///
/// ```
/// use tableview_lib::model::{Column, Dataset, Row};
///
/// let dataset = Dataset::new(
///     vec![Column::new("name", "Name")],
///     vec![Row::new("1").set("name", "Apple"), Row::new("1").set("name", "Dup")],
/// )
/// .unwrap();
///
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.dropped_rows(), 1);
/// assert_eq!(dataset.row("1").unwrap().display("name"), "Apple");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
    dropped_rows: usize,
}

impl Dataset {
    /// Creates a dataset, validating column keys and de-duplicating row ids.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, DatasetError> {
        validate_columns(&columns)?;

        let mut index: HashMap<String, usize> = HashMap::with_capacity(rows.len());
        let mut kept = Vec::with_capacity(rows.len());
        let mut dropped_rows = 0;

        for (position, row) in rows.into_iter().enumerate() {
            if index.contains_key(row.id()) {
                warn!(
                    "Dropping row at position {} with duplicate id '{}'",
                    position,
                    row.id()
                );
                dropped_rows += 1;
                continue;
            }
            index.insert(row.id().to_string(), kept.len());
            kept.push(row);
        }

        debug!(
            "Loaded dataset: {} columns, {} rows ({} dropped)",
            columns.len(),
            kept.len(),
            dropped_rows
        );

        Ok(Self {
            columns,
            rows: kept,
            index,
            dropped_rows,
        })
    }

    /// Creates a dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses columns and rows from JSON arrays.
    ///
    /// `columns_json` is an array of column objects
    /// (`{"key", "label", "align"?, "sortable"?}`); `rows_json` is an array of
    /// row objects, each with an `id` member. Numeric ids are converted to
    /// their display text. Nested arrays or objects are kept as their JSON
    /// text.
    pub fn from_json(columns_json: &str, rows_json: &str) -> Result<Self, DatasetError> {
        let columns: Vec<Column> = serde_json::from_str(columns_json)?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(rows_json)?;

        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(position, value)| row_from_json(position, value))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(columns, rows)
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Returns the rows in canonical order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Looks a row up by id.
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    /// Returns `true` if a row with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows discarded at load because their id was already taken.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

fn validate_columns(columns: &[Column]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        if column.key.is_empty() {
            return Err(DatasetError::EmptyColumnKey { position });
        }
        if !seen.insert(column.key.as_str()) {
            return Err(DatasetError::DuplicateColumn {
                key: column.key.clone(),
            });
        }
    }
    Ok(())
}

fn row_from_json(position: usize, value: serde_json::Value) -> Result<Row, DatasetError> {
    let serde_json::Value::Object(mut object) = value else {
        return Err(DatasetError::InvalidRow { position });
    };

    let id = match object.remove("id") {
        None | Some(serde_json::Value::Null) => {
            return Err(DatasetError::MissingRowId { position });
        }
        Some(serde_json::Value::String(s)) => s,
        // Numeric ids read the way the same number reads in a cell, so 2.0 is "2".
        Some(serde_json::Value::Number(n)) => match n.as_u64() {
            Some(u) => u.to_string(),
            None => cell_from_json(serde_json::Value::Number(n)).to_string(),
        },
        Some(_) => return Err(DatasetError::InvalidRowId { position }),
    };

    let mut row = Row::new(id);
    for (key, value) in object {
        row.insert(key, cell_from_json(value));
    }
    Ok(row)
}

fn cell_from_json(value: serde_json::Value) -> CellValue {
    use serde_json::Value;

    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Int(i),
            None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
        },
        Value::String(s) => CellValue::String(s),
        other @ (Value::Array(_) | Value::Object(_)) => CellValue::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &str = r#"[
        {"key": "name", "label": "Name", "sortable": true},
        {"key": "price", "label": "Price", "align": "right", "sortable": true}
    ]"#;

    #[test]
    fn test_from_json() {
        let rows = r#"[
            {"id": "1", "name": "Apple", "price": 2},
            {"id": 2, "name": "Peach", "price": 4.5, "tags": ["a"]}
        ]"#;
        let dataset = Dataset::from_json(COLUMNS, rows).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns().len(), 2);
        let peach = dataset.row("2").unwrap();
        assert_eq!(peach.get("price"), Some(&CellValue::Float(4.5)));
        assert_eq!(peach.display("tags"), r#"["a"]"#);
        assert_eq!(dataset.rows()[0].id(), "1");
    }

    #[test]
    fn test_numeric_ids_match_cell_display() {
        let rows = r#"[{"id": 2.0}, {"id": -3}, {"id": 2.5}, {"id": 18446744073709551615}]"#;
        let dataset = Dataset::from_json(COLUMNS, rows).unwrap();

        let ids: Vec<&str> = dataset.rows().iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["2", "-3", "2.5", "18446744073709551615"]);
        assert_eq!(CellValue::Float(2.0).to_string(), dataset.rows()[0].id());
    }

    #[test]
    fn test_from_json_errors() {
        let err = Dataset::from_json(COLUMNS, r#"[{"name": "x"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::MissingRowId { position: 0 }));

        let err = Dataset::from_json(COLUMNS, r#"[{"id": "1"}, {"id": [1]}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRowId { position: 1 }));

        let err = Dataset::from_json(COLUMNS, r#"[1]"#).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRow { position: 0 }));

        let err = Dataset::from_json(COLUMNS, "not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_column_validation() {
        let err = Dataset::new(
            vec![Column::new("a", "A"), Column::new("a", "Again")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateColumn { ref key } if key == "a"));

        let err = Dataset::new(vec![Column::new("", "Blank")], vec![]).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyColumnKey { position: 0 }));
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let dataset = Dataset::new(
            vec![Column::new("name", "Name")],
            vec![
                Row::new("a").set("name", "first"),
                Row::new("b").set("name", "other"),
                Row::new("a").set("name", "second"),
            ],
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dropped_rows(), 1);
        assert_eq!(dataset.row("a").unwrap().display("name"), "first");
        assert!(dataset.contains("b"));
        assert!(!dataset.contains("c"));
    }
}
