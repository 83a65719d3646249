//! Page window over the sorted, filtered rows

use serde::Deserialize;
use serde::Serialize;

use crate::model::Asset;

/// Rows-per-page choice. The set is fixed; hosts expose it verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Ten,
    #[default]
    Twenty,
    TwentyFive,
}

impl PageSize {
    /// The choices exposed to the user, in menu order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::TwentyFive];

    /// Rows per page for this choice.
    pub fn rows(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::TwentyFive => 25,
        }
    }
}

/// One visible page of the pipeline's output.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// The rows of this page, at most one page size worth.
    pub rows: Vec<Asset>,
    /// Trailing placeholder rows needed to keep the visible area a constant
    /// height when the last page is partially filled.
    pub empty_rows: usize,
}

/// Computes the page window `[page*size, page*size + size)`, clipped to the
/// input length.
///
/// An out-of-range page index clips to an empty slice rather than erroring;
/// the placeholder count then covers the whole page.
pub fn page_slice(rows: &[Asset], page: usize, size: PageSize) -> PageView {
    let size = size.rows();
    let start = (page * size).min(rows.len());
    let end = (start + size).min(rows.len());

    PageView {
        rows: rows[start..end].to_vec(),
        empty_rows: size - size.min(rows.len().saturating_sub(page * size)),
    }
}
