//! Dataset ingestion boundary

use crate::error::DatasetError;

use super::Asset;

/// Parses a JSON array of rows into a dataset.
///
/// The field contract is enforced here, at the ingestion boundary: `id` is
/// required, `mileage` may be null, and the remaining display fields default
/// when absent. A payload that is not an array of objects is a
/// [`DatasetError`].
pub fn parse_dataset(json: &str) -> Result<Vec<Asset>, DatasetError> {
    let assets: Vec<Asset> = serde_json::from_str(json)?;
    Ok(assets)
}
