//! Stable single-key sort

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Asset;
use crate::model::Column;

/// Sort direction for the active comparator key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// The active comparator key and direction.
///
/// Defaults to ascending on `id`, the order a freshly mounted table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub direction: Direction,
}

impl SortState {
    /// Applies a sort request for `column`.
    ///
    /// Re-requesting the current column while ascending toggles to
    /// descending; any other request sorts ascending on the requested
    /// column.
    pub fn request(&mut self, column: Column) {
        let was_ascending = self.column == column && self.direction == Direction::Ascending;
        self.direction = if was_ascending {
            Direction::Descending
        } else {
            Direction::Ascending
        };
        self.column = column;
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: Column::Id,
            direction: Direction::Ascending,
        }
    }
}

/// Sorts rows by one column, stably.
///
/// Each row is decorated with its original index and the index is the final
/// tie-break, so rows comparing equal on the key keep their input order for
/// either direction. The direction adjustment applies to the key comparison
/// only, never to the tie-break.
pub fn stable_sort(rows: &[Asset], column: Column, direction: Direction) -> Vec<Asset> {
    let by_key = comparator(column, direction);
    let mut decorated: Vec<(usize, &Asset)> = rows.iter().enumerate().collect();
    decorated.sort_unstable_by(|(a_ix, a), (b_ix, b)| by_key(a, b).then(a_ix.cmp(b_ix)));
    decorated.into_iter().map(|(_, row)| row.clone()).collect()
}

/// Comparator over one column, direction-adjusted, without the tie-break.
/// Exposed for hosts that sort borrowed views themselves.
pub fn comparator(
    column: Column,
    direction: Direction,
) -> impl Fn(&Asset, &Asset) -> Ordering {
    move |a, b| {
        let by_key = a.cell(column).sort_cmp(&b.cell(column));
        match direction {
            Direction::Ascending => by_key,
            Direction::Descending => by_key.reverse(),
        }
    }
}
