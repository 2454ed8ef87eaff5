//! Cell values

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A displayable cell value.
///
/// Deserialized untagged, so a JSON row like
/// `{"id": "1", "name": "Apple", "price": 2, "ripe": true}` maps each member
/// to the matching variant.
///
/// # Example
///
/// ```
/// use tableview_lib::model::CellValue;
///
/// assert_eq!(CellValue::from(2.0).to_string(), "2");
/// assert_eq!(CellValue::from(" 4.5 ").as_number(), Some(4.5));
/// assert!(CellValue::Null.is_missing());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty cell. Treated the same as an absent key.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Null`].
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the value as a finite number, if it is one.
    ///
    /// Strings count when their trimmed text parses as a finite `f64`, so a
    /// column of `"10"`, `"9"`, `"100"` sorts numerically.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Int(v) => *v as f64,
            CellValue::Float(v) => *v,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Null | CellValue::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Lowercased display text, used for searching and string ordering.
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}
