//! Row selection (checkbox) state.
//!
//! Selection is keyed by row id, never by position, so checked rows stay
//! checked while the visible set changes through filtering, sorting and
//! paging. Ids that are not in the current dataset are kept but inert.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    None,
    /// At most one row is checked; toggling a row replaces the selection.
    Single,
    /// Any number of rows can be checked.
    #[default]
    Multiple,
}

/// State of the "select all" checkbox in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCheckState {
    /// The visible set is non-empty and every visible row is checked.
    Checked,
    /// Some, but not all, visible rows are checked.
    Indeterminate,
    /// No visible row is checked, or nothing is visible.
    Unchecked,
}

impl HeaderCheckState {
    /// Derives the header state from the checked set and the visible ids.
    pub fn of<'a, I>(selection: &Selection, visible_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut visible = 0;
        let mut checked = 0;
        for id in visible_ids {
            visible += 1;
            if selection.contains(id) {
                checked += 1;
            }
        }

        match checked {
            0 => HeaderCheckState::Unchecked,
            n if n == visible => HeaderCheckState::Checked,
            _ => HeaderCheckState::Indeterminate,
        }
    }
}

/// Ids added and removed by one selection change, each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SelectionDelta {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The set of checked row ids.
///
/// Ids are kept ordered, so every [`SelectionDelta`] and [`Selection::ids`]
/// comes out sorted without a separate pass. The pivot is the row a plain
/// click last landed on; shift-clicks extend from it through the visible
/// order.
///
/// # Example
///
/// ```
/// use tableview_lib::selection::Selection;
///
/// let mut selection = Selection::new();
/// selection.toggle("3");
/// let delta = selection.set(["2", "3", "1"], true);
/// assert_eq!(delta.added, ["1", "2"]);
/// assert!(delta.removed.is_empty());
/// assert_eq!(selection.ids(), ["1", "2", "3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: BTreeSet<String>,
    pivot: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checked ids in ascending order.
    pub fn ids(&self) -> Vec<String> {
        self.checked.iter().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Flips one row and makes it the pivot.
    pub fn toggle(&mut self, id: &str) -> SelectionDelta {
        self.pivot = Some(id.to_string());
        let check = !self.contains(id);
        self.set([id], check)
    }

    /// Checks `id` and unchecks everything else. Used by single mode.
    pub fn replace(&mut self, id: &str) -> SelectionDelta {
        self.pivot = Some(id.to_string());
        let others: Vec<String> = self
            .checked
            .iter()
            .filter(|checked| checked.as_str() != id)
            .cloned()
            .collect();
        SelectionDelta {
            removed: self.mark(others.iter().map(String::as_str), false),
            added: self.mark([id], true),
        }
    }

    /// Checks or unchecks exactly `ids`; every other id keeps its state.
    pub fn set<'a, I>(&mut self, ids: I, check: bool) -> SelectionDelta
    where
        I: IntoIterator<Item = &'a str>,
    {
        let changed = self.mark(ids, check);
        if check {
            SelectionDelta {
                added: changed,
                removed: Vec::new(),
            }
        } else {
            SelectionDelta {
                added: Vec::new(),
                removed: changed,
            }
        }
    }

    /// Shift-click: checks the rows of `visible` between the pivot and
    /// `target`, inclusive.
    ///
    /// The pivot only counts while it is visible. Otherwise `target` is
    /// checked on its own and becomes the new pivot. A successful range
    /// leaves the pivot where it was.
    pub fn extend_to(&mut self, target: &str, visible: &[&str]) -> SelectionDelta {
        let position = |id: &str| visible.iter().position(|v| *v == id);
        match (self.pivot.as_deref().and_then(position), position(target)) {
            (Some(from), Some(to)) => {
                let span = &visible[from.min(to)..=from.max(to)];
                self.set(span.iter().copied(), true)
            }
            _ => {
                self.pivot = Some(target.to_string());
                self.set([target], true)
            }
        }
    }

    /// Unchecks everything and forgets the pivot.
    pub fn clear(&mut self) -> SelectionDelta {
        self.pivot = None;
        SelectionDelta {
            added: Vec::new(),
            removed: std::mem::take(&mut self.checked).into_iter().collect(),
        }
    }

    /// Applies `check` to each id and returns the ones whose state flipped,
    /// sorted.
    fn mark<'a, I>(&mut self, ids: I, check: bool) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut changed = Vec::new();
        for id in ids {
            let flipped = if check {
                self.checked.insert(id.to_string())
            } else {
                self.checked.remove(id)
            };
            if flipped {
                changed.push(id.to_string());
            }
        }
        changed.sort();
        changed
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            checked: iter.into_iter().map(Into::into).collect(),
            pivot: None,
        }
    }
}

/// Returns `checked` with the membership of `id` flipped.
pub fn toggle_row(checked: &Selection, id: &str) -> Selection {
    let mut next = checked.clone();
    next.toggle(id);
    next
}

/// Returns `checked` with every visible id added (`select_all`) or removed.
///
/// Only the visible ids are affected. This lets a user filter, check
/// everything in the filtered view, clear the filter, and still have just
/// those rows checked.
pub fn toggle_all<'a, I>(checked: &Selection, visible_ids: I, select_all: bool) -> Selection
where
    I: IntoIterator<Item = &'a str>,
{
    let mut next = checked.clone();
    next.set(visible_ids, select_all);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_row_is_pure() {
        let empty = Selection::new();
        let one = toggle_row(&empty, "a");
        assert!(empty.ids().is_empty());
        assert!(one.contains("a"));
        assert!(toggle_row(&one, "a").ids().is_empty());
    }

    #[test]
    fn test_toggle_all_visible_scope() {
        let checked: Selection = ["x"].into_iter().collect();

        let all = toggle_all(&checked, ["a", "b"], true);
        assert_eq!(all.ids(), ["a", "b", "x"]);

        let none = toggle_all(&all, ["a"], false);
        assert_eq!(none.ids(), ["b", "x"]);
    }

    #[test]
    fn test_header_state() {
        let checked: Selection = ["a", "b"].into_iter().collect();
        assert_eq!(
            HeaderCheckState::of(&checked, ["a", "b"]),
            HeaderCheckState::Checked
        );
        assert_eq!(
            HeaderCheckState::of(&checked, ["a", "c"]),
            HeaderCheckState::Indeterminate
        );
        assert_eq!(
            HeaderCheckState::of(&checked, ["c"]),
            HeaderCheckState::Unchecked
        );
        assert_eq!(
            HeaderCheckState::of(&checked, std::iter::empty()),
            HeaderCheckState::Unchecked
        );
    }

    #[test]
    fn test_set_reports_sorted_changes() {
        let mut selection: Selection = ["b"].into_iter().collect();
        let delta = selection.set(["c", "b", "a"], true);
        assert_eq!(delta.added, ["a", "c"]);
        assert!(delta.removed.is_empty());

        let delta = selection.set(["d", "c"], false);
        assert!(delta.added.is_empty());
        assert_eq!(delta.removed, ["c"]);
        assert!(selection.set(["d"], false).is_empty());
    }

    #[test]
    fn test_replace() {
        let mut selection: Selection = ["b", "a"].into_iter().collect();
        let delta = selection.replace("c");
        assert_eq!(delta.added, ["c"]);
        assert_eq!(delta.removed, ["a", "b"]);
        assert_eq!(selection.pivot.as_deref(), Some("c"));

        let delta = selection.replace("c");
        assert!(delta.is_empty());
    }

    #[test]
    fn test_extend_to_keeps_pivot() {
        let visible = ["1", "2", "3", "4", "5"];
        let mut selection = Selection::new();
        selection.toggle("4");

        let delta = selection.extend_to("2", &visible);
        assert_eq!(delta.added, ["2", "3"]);
        assert_eq!(selection.ids(), ["2", "3", "4"]);
        assert_eq!(selection.pivot.as_deref(), Some("4"));
    }

    #[test]
    fn test_extend_to_with_hidden_pivot() {
        let mut selection = Selection::new();
        selection.toggle("9");
        selection.toggle("9");

        let delta = selection.extend_to("2", &["1", "2", "3"]);
        assert_eq!(delta.added, ["2"]);
        assert!(delta.removed.is_empty());
        assert_eq!(selection.pivot.as_deref(), Some("2"));

        let delta = selection.extend_to("3", &["1", "2", "3"]);
        assert_eq!(delta.added, ["3"]);
    }

    #[test]
    fn test_clear() {
        let mut selection: Selection = ["b", "a"].into_iter().collect();
        selection.toggle("c");
        assert_eq!(selection.clear().removed, ["a", "b", "c"]);
        assert!(selection.ids().is_empty());
        assert_eq!(selection.pivot, None);
    }
}
