//! Configuration errors

use thiserror::Error;

/// Errors raised while parsing a [`TableConfig`](crate::config::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("page size options must not be empty")]
    NoPageSizes,
}
