//! Keyword search over visible columns.

use log::trace;

use crate::model::Column;
use crate::model::Row;

/// Keeps the rows whose cells at `columns` contain `keyword`.
///
/// Matching is a case-insensitive substring test against each cell's display
/// text. The keyword is trimmed first; an empty keyword returns the input
/// unchanged. Output keeps the input order.
///
/// # Example
///
/// ```
/// use tableview_lib::model::{Column, Row};
/// use tableview_lib::query::filter_rows;
///
/// let columns = [Column::new("name", "Name")];
/// let rows = [
///     Row::new("1").set("name", "Apple"),
///     Row::new("2").set("name", "Orange"),
/// ];
///
/// let found = filter_rows(rows.iter(), &columns, "AN");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id(), "2");
/// ```
pub fn filter_rows<'a, I>(rows: I, columns: &[Column], keyword: &str) -> Vec<&'a Row>
where
    I: IntoIterator<Item = &'a Row>,
{
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return rows.into_iter().collect();
    }

    let filtered: Vec<&Row> = rows
        .into_iter()
        .filter(|row| row_matches(row, columns, &needle))
        .collect();

    trace!("filter '{}' kept {} rows", needle, filtered.len());
    filtered
}

/// Tests one row against an already trimmed and lowercased needle.
fn row_matches(row: &Row, columns: &[Column], needle: &str) -> bool {
    columns.iter().any(|column| {
        row.get(&column.key)
            .is_some_and(|value| value.search_text().contains(needle))
    })
}
