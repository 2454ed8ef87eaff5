//! Sort stage.

use std::cmp::Ordering;

use log::trace;
use serde::Deserialize;
use serde::Serialize;

use crate::model::CellValue;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort: a column key and a direction.
///
/// "No sort" is expressed as `Option<SortBy>::None`, which keeps rows in
/// their natural order.
///
/// # Example
///
/// ```
/// use tableview_lib::query::{Direction, SortBy};
///
/// let sort = SortBy::desc("price");
/// assert_eq!(sort.direction, Direction::Desc);
///
/// // A key without a direction (or the reverse) means natural order.
/// assert_eq!(SortBy::from_parts(Some("price"), None), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    pub key: String,
    pub direction: Direction,
}

impl SortBy {
    /// Creates a sort on `key` in the given direction.
    pub fn new(key: impl Into<String>, direction: Direction) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Creates an ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, Direction::Asc)
    }

    /// Creates a descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, Direction::Desc)
    }

    /// Builds a sort from a nullable key and a nullable direction.
    ///
    /// Returns `None` (natural order) unless both are present.
    pub fn from_parts(key: Option<&str>, direction: Option<Direction>) -> Option<Self> {
        Some(Self::new(key?, direction?))
    }
}

/// Per-row value extracted once before sorting.
enum SortKey {
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn of(value: Option<&CellValue>) -> Self {
        match value {
            None => SortKey::Missing,
            Some(v) => match v.as_number() {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(v.search_text()),
            },
        }
    }

    fn compare(&self, other: &Self, direction: Direction) -> Ordering {
        let ordering = match (self, other) {
            (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
            (SortKey::Missing, _) => return Ordering::Greater,
            (_, SortKey::Missing) => return Ordering::Less,
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // Numbers rank before text so mixed columns still have a total order.
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        };

        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Orders rows by the value at `sort.key`.
///
/// - Two numeric values (numbers, or strings that parse as finite numbers)
///   compare numerically; text compares case-insensitively.
/// - When a numeric value meets text, the number comes first in ascending
///   order and last in descending order, so `[5, "#x"]` ascending keeps 5
///   ahead of `"#x"` even though `"#"` sorts before `"5"` as text.
/// - Missing values go last in both directions.
/// - The sort is stable: equal values keep their input order.
/// - `None` returns the rows unchanged.
///
/// # Example
///
/// ```
/// use tableview_lib::model::Row;
/// use tableview_lib::query::{sort_rows, SortBy};
///
/// let rows = [
///     Row::new("a").set("n", 10),
///     Row::new("b"),
///     Row::new("c").set("n", "9"),
/// ];
/// let sorted = sort_rows(rows.iter().collect(), Some(&SortBy::desc("n")));
/// let ids: Vec<&str> = sorted.iter().map(|r| r.id()).collect();
/// assert_eq!(ids, ["a", "c", "b"]);
/// ```
pub fn sort_rows<'a>(rows: Vec<&'a Row>, sort: Option<&SortBy>) -> Vec<&'a Row> {
    let Some(sort) = sort else {
        return rows;
    };

    let mut keyed: Vec<(SortKey, &'a Row)> = rows
        .into_iter()
        .map(|row| (SortKey::of(row.get(&sort.key)), row))
        .collect();

    // `sort_by` is stable, which provides the original-order tie-break.
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, sort.direction));

    trace!(
        "sorted {} rows by '{}' {:?}",
        keyed.len(),
        sort.key,
        sort.direction
    );
    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Compares two rows at `key` the way [`sort_rows`] does.
pub fn compare_rows(a: &Row, b: &Row, key: &str, direction: Direction) -> Ordering {
    SortKey::of(a.get(key)).compare(&SortKey::of(b.get(key)), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.id().to_string()).collect()
    }

    fn fruit() -> Vec<Row> {
        vec![
            Row::new("1").set("name", "Apple").set("price", 2),
            Row::new("2").set("name", "Peach").set("price", 4),
            Row::new("3").set("name", "Orange").set("price", 1),
        ]
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let rows = fruit();
        assert_eq!(ids(&sort_rows(rows.iter().collect(), None)), ["1", "2", "3"]);
    }

    #[test]
    fn test_numeric_sort() {
        let rows = fruit();
        let asc = sort_rows(rows.iter().collect(), Some(&SortBy::asc("price")));
        assert_eq!(ids(&asc), ["3", "1", "2"]);
        let desc = sort_rows(rows.iter().collect(), Some(&SortBy::desc("price")));
        assert_eq!(ids(&desc), ["2", "1", "3"]);
    }

    #[test]
    fn test_numeric_strings_sort_numerically() {
        let rows = [
            Row::new("a").set("n", "100"),
            Row::new("b").set("n", "9"),
            Row::new("c").set("n", 10.5),
        ];
        let out = sort_rows(rows.iter().collect(), Some(&SortBy::asc("n")));
        assert_eq!(ids(&out), ["b", "c", "a"]);

        // "#x" sorts before "5" as text, but the number still leads.
        let rows = [Row::new("a").set("v", 5), Row::new("b").set("v", "#x")];
        let asc = sort_rows(rows.iter().collect(), Some(&SortBy::asc("v")));
        assert_eq!(ids(&asc), ["a", "b"]);
        let desc = sort_rows(rows.iter().collect(), Some(&SortBy::desc("v")));
        assert_eq!(ids(&desc), ["b", "a"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let rows = [
            Row::new("a").set("s", "banana"),
            Row::new("b").set("s", "Apple"),
            Row::new("c").set("s", "cherry"),
        ];
        let out = sort_rows(rows.iter().collect(), Some(&SortBy::asc("s")));
        assert_eq!(ids(&out), ["b", "a", "c"]);
    }

    #[test]
    fn test_missing_values_last_in_both_directions() {
        let rows = [
            Row::new("a"),
            Row::new("b").set("n", 2),
            Row::new("c").set("n", crate::model::CellValue::Null),
            Row::new("d").set("n", 1),
        ];
        let asc = sort_rows(rows.iter().collect(), Some(&SortBy::asc("n")));
        assert_eq!(ids(&asc), ["d", "b", "a", "c"]);
        let desc = sort_rows(rows.iter().collect(), Some(&SortBy::desc("n")));
        assert_eq!(ids(&desc), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_stable_for_equal_values() {
        let rows = [
            Row::new("a").set("g", "x"),
            Row::new("b").set("g", "y"),
            Row::new("c").set("g", "X"),
            Row::new("d").set("g", "y"),
        ];
        let asc = sort_rows(rows.iter().collect(), Some(&SortBy::asc("g")));
        assert_eq!(ids(&asc), ["a", "c", "b", "d"]);
        let desc = sort_rows(rows.iter().collect(), Some(&SortBy::desc("g")));
        assert_eq!(ids(&desc), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_unknown_key_keeps_order() {
        let rows = fruit();
        let out = sort_rows(rows.iter().collect(), Some(&SortBy::desc("weight")));
        assert_eq!(ids(&out), ["1", "2", "3"]);
    }

    #[test]
    fn test_mixed_values_numbers_first() {
        let rows = [
            Row::new("a").set("v", "pear"),
            Row::new("b").set("v", 3),
            Row::new("c").set("v", "10"),
        ];
        let out = sort_rows(rows.iter().collect(), Some(&SortBy::asc("v")));
        assert_eq!(ids(&out), ["b", "c", "a"]);
    }

    #[test]
    fn test_compare_rows() {
        let rows = fruit();
        assert_eq!(
            compare_rows(&rows[0], &rows[1], "price", Direction::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_rows(&rows[0], &rows[1], "price", Direction::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            SortBy::from_parts(Some("a"), Some(Direction::Asc)),
            Some(SortBy::asc("a"))
        );
        assert_eq!(SortBy::from_parts(None, Some(Direction::Asc)), None);
        assert_eq!(Direction::Asc.reverse(), Direction::Desc);
    }
}
