//! CellValue enum for table cell values

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// A tagged value for a single table cell.
///
/// Every declared column of an [`Asset`](super::Asset) projects to one of
/// these variants. The enum carries the three behaviours the pipeline needs
/// from a cell: display text for the view, a canonical serialization for the
/// whole-record search, and a total ordering for the sorter.
///
/// # Example
///
/// ```
/// use fleet_table::model::CellValue;
///
/// let mileage = CellValue::from(Some(50.0));
/// let missing = CellValue::from(None::<f64>);
///
/// assert_eq!(mileage.display(), "50");
/// assert_eq!(missing.display(), "NA");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
        }
    }

    /// Display text for the view. Null cells render as the `"NA"`
    /// placeholder rather than failing.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => "NA".to_string(),
            other => other.search_text(),
        }
    }

    /// Canonical serialization used by the whole-record substring search.
    ///
    /// Null serializes as `"null"` so that searching behaves the same as
    /// searching the record's JSON form.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Null => "null".to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// The numeric reading of this value, if it has one.
    fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Total ordering used by the sorter.
    ///
    /// Null sorts before any non-null value. Two numeric values compare
    /// numerically regardless of variant; everything else compares
    /// lexicographically on the canonical serialization.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => self.search_text().cmp(&other.search_text()),
            },
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

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}
