//! Error types

mod config;
mod dataset;

pub use config::*;
pub use dataset::*;
