//! Page stage.

use std::fmt;

use log::trace;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;

/// Rows per page.
///
/// Serializes as a number, or as the string `"All"` when paging is off.
///
/// # Example
///
/// ```
/// use tableview_lib::query::PageSize;
///
/// assert_eq!(PageSize::from_count(25), PageSize::Rows(25));
/// // Non-positive sizes fall back to showing everything.
/// assert_eq!(PageSize::from_count(0), PageSize::All);
/// assert_eq!(PageSize::from_count(-5), PageSize::All);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    /// A fixed number of rows per page. Zero behaves like `All`.
    Rows(usize),
    /// Paging disabled.
    #[default]
    All,
}

impl PageSize {
    /// Converts a host-supplied count, treating `n <= 0` as `All`.
    pub fn from_count(n: i64) -> Self {
        match usize::try_from(n) {
            Ok(0) | Err(_) => PageSize::All,
            Ok(n) => PageSize::Rows(n),
        }
    }

    /// Returns the row limit, or `None` when every row is shown.
    pub fn limit(self) -> Option<usize> {
        match self {
            PageSize::Rows(0) | PageSize::All => None,
            PageSize::Rows(n) => Some(n),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit() {
            Some(n) => write!(f, "{}", n),
            None => f.write_str("All"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Count(i64),
    Label(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = String;

    fn try_from(repr: PageSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            PageSizeRepr::Count(n) => Ok(PageSize::from_count(n)),
            PageSizeRepr::Label(s) if s.eq_ignore_ascii_case("all") => Ok(PageSize::All),
            PageSizeRepr::Label(s) => Err(format!("invalid page size '{}'", s)),
        }
    }
}

impl From<PageSize> for PageSizeRepr {
    fn from(size: PageSize) -> Self {
        match size.limit() {
            Some(n) => PageSizeRepr::Count(i64::try_from(n).unwrap_or(i64::MAX)),
            None => PageSizeRepr::Label("All".to_string()),
        }
    }
}

/// One page of rows with the pagination state that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Rows on this page, in display order.
    pub rows: Vec<&'a Row>,
    /// The requested page after clamping to `1..=total_pages`.
    pub current_page: usize,
    /// Number of pages (at least 1).
    pub total_pages: usize,
    /// Rows across all pages.
    pub total_rows: usize,
    /// Page size in effect.
    pub page_size: PageSize,
}

/// 1-based row positions shown on a page, for "1-10 of 25" labels.
///
/// `first` and `last` are 0 when there are no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl Page<'_> {
    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns the row positions covered by this page.
    pub fn range(&self) -> PageRange {
        if self.rows.is_empty() {
            return PageRange {
                first: 0,
                last: 0,
                total: self.total_rows,
            };
        }
        let offset = match self.page_size.limit() {
            Some(n) => (self.current_page - 1) * n,
            None => 0,
        };
        PageRange {
            first: offset + 1,
            last: offset + self.rows.len(),
            total: self.total_rows,
        }
    }
}

/// Slices `rows` into the page implied by `current_page` and `page_size`.
///
/// Out-of-range pages clamp silently to `1..=total_pages`. The caller stores
/// [`Page::current_page`] back into its state so later renders agree.
///
/// # Example
///
/// ```
/// use tableview_lib::model::Row;
/// use tableview_lib::query::{paginate, PageSize};
///
/// let rows: Vec<Row> = (0..25).map(|i| Row::new(i.to_string())).collect();
/// let page = paginate(rows.iter().collect(), 10, PageSize::Rows(10));
///
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.current_page, 3);
/// assert_eq!(page.rows.len(), 5);
/// ```
pub fn paginate(rows: Vec<&Row>, current_page: usize, page_size: PageSize) -> Page<'_> {
    let total_rows = rows.len();

    let Some(limit) = page_size.limit() else {
        return Page {
            rows,
            current_page: 1,
            total_pages: 1,
            total_rows,
            page_size: PageSize::All,
        };
    };

    let total_pages = total_rows.div_ceil(limit).max(1);
    let clamped = current_page.clamp(1, total_pages);
    if clamped != current_page {
        trace!("page {} clamped to {} of {}", current_page, clamped, total_pages);
    }

    let visible = rows
        .into_iter()
        .skip((clamped - 1) * limit)
        .take(limit)
        .collect();

    Page {
        rows: visible,
        current_page: clamped,
        total_pages,
        total_rows,
        page_size,
    }
}
