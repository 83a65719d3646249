//! Whole-record substring search

use crate::model::Asset;

/// Filters rows whose full textual serialization contains `query` as a
/// case-insensitive substring.
///
/// The haystack is [`Asset::search_text`]: every declared field, not any one
/// column. There is no tokenization, per-field weighting, or fuzzy matching.
/// An empty query yields the full input, same elements, same order.
///
/// Callers must always filter the full dataset, never a previously filtered
/// result, so clearing the search restores the complete set.
pub fn search(rows: &[Asset], query: &str) -> Vec<Asset> {
    if query.is_empty() {
        return rows.to_vec();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
