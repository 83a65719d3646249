//! ColumnError for column name parsing

/// Error type for resolving a column name at the host boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ColumnError {
    /// The name does not match any declared column.
    #[error("Unknown column '{name}'")]
    Unknown { name: String },
}

impl ColumnError {
    /// Creates a new unknown column error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }
}
