//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::query::PageSize;
use crate::selection::SelectionMode;

/// Configuration for a [`TableView`](crate::view::TableView).
///
/// # Example
///
/// ```
/// use tableview_lib::config::TableConfig;
/// use tableview_lib::query::PageSize;
/// use tableview_lib::selection::SelectionMode;
///
/// let config = TableConfig::default()
///     .with_default_page_size(PageSize::Rows(25))
///     .with_selection_mode(SelectionMode::Single);
///
/// let parsed = TableConfig::from_json(r#"{"default_page_size": 25, "selection_mode": "single"}"#)
///     .unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a freshly created view starts with.
    ///
    /// Default: `All`
    pub default_page_size: PageSize,

    /// Sizes offered by the page-size picker.
    ///
    /// Default: 10, 25, 50, All
    pub page_size_options: Vec<PageSize>,

    /// Which row selections are allowed.
    ///
    /// Default: `Multiple`
    pub selection_mode: SelectionMode,

    /// Return to page 1 whenever the search keyword changes. When off, the
    /// current page is only clamped to the new page count.
    ///
    /// Default: `false`
    pub reset_page_on_search: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::All,
            page_size_options: vec![
                PageSize::Rows(10),
                PageSize::Rows(25),
                PageSize::Rows(50),
                PageSize::All,
            ],
            selection_mode: SelectionMode::Multiple,
            reset_page_on_search: false,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a host-supplied JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        Ok(config)
    }

    /// Sets the initial page size.
    pub fn with_default_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = PageSize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Sets whether a keyword change returns to the first page.
    pub fn with_reset_page_on_search(mut self, reset: bool) -> Self {
        self.reset_page_on_search = reset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert!(!config.reset_page_on_search);
    }

    #[test]
    fn test_from_json_overrides() {
        let config = TableConfig::from_json(
            r#"{"page_size_options": [5, "All"], "reset_page_on_search": true, "selection_mode": "none"}"#,
        )
        .unwrap();
        assert_eq!(
            config.page_size_options,
            vec![PageSize::Rows(5), PageSize::All]
        );
        assert!(config.reset_page_on_search);
        assert_eq!(config.selection_mode, SelectionMode::None);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            TableConfig::from_json(r#"{"page_size_options": []}"#),
            Err(ConfigError::NoPageSizes)
        ));
        assert!(matches!(
            TableConfig::from_json(r#"{"selection_mode": "many"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
