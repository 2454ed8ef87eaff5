//! Filter, sort and page stages.
//!
//! Each stage is a pure function over borrowed rows. The view always runs
//! them in the order filter, sort, page: sorting after paging would only
//! order rows within a page.

mod filter;
mod order;
mod page;

pub use filter::filter_rows;
pub use order::{Direction, SortBy, compare_rows, sort_rows};
pub use page::{Page, PageRange, PageSize, paginate};
