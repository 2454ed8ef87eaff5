//! Tabular data view engine
//!
//! Client-side search, sort, pagination and row selection for a table
//! component. The host hands over a [`Dataset`](model::Dataset) and feeds user
//! actions into a [`TableView`](view::TableView); the view answers with the
//! visible rows, the checked row ids and the pagination state.
//!
//! # Example
//!
//! ```
//! use tableview_lib::config::TableConfig;
//! use tableview_lib::model::{Column, Dataset, Row};
//! use tableview_lib::query::{PageSize, SortBy};
//! use tableview_lib::view::TableView;
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("price", "Price").sortable(),
//! ];
//! let rows = vec![
//!     Row::new("1").set("name", "Apple").set("price", 2),
//!     Row::new("2").set("name", "Peach").set("price", 4),
//!     Row::new("3").set("name", "Orange").set("price", 1),
//! ];
//! let dataset = Dataset::new(columns, rows).unwrap();
//!
//! let mut table = TableView::with_dataset(TableConfig::default(), dataset);
//! table.set_sort(Some(SortBy::asc("price")));
//! table.set_page_size(PageSize::Rows(2));
//!
//! let view = table.view();
//! let ids: Vec<&str> = view.rows.iter().map(|r| r.id()).collect();
//! assert_eq!(ids, ["3", "1"]);
//! assert_eq!(view.total_pages, 2);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod query;
pub mod selection;
pub mod view;

pub use config::TableConfig;
pub use view::TableView;
