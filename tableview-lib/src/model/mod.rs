//! Data model types

mod column;
mod dataset;
mod row;
mod value;

pub use column::{Alignment, Column};
pub use dataset::Dataset;
pub use row::Row;
pub use value::CellValue;
