//! DatasetError for the ingestion boundary

/// Error type for dataset ingestion.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The payload could not be deserialized into rows.
    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}
