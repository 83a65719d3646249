//! Table component state and transitions

use std::fmt;

use log::debug;

use crate::model::Asset;
use crate::model::Column;
use crate::query;
use crate::query::SortState;
use crate::view::PageSize;
use crate::view::PageView;
use crate::view::page_slice;

/// Callback invoked with the newly selected row on dataset replacement.
pub type SelectionCallback = Box<dyn FnMut(Option<&Asset>)>;

/// State behind one sortable, searchable, paginated table view.
///
/// Like the frameworks' user-managed widget state, this is a plain struct
/// the host keeps alive across frames and drives through `&mut self`
/// transitions, one per user-interaction or external-update event. Every
/// transition runs to completion before the next visible page is computed,
/// so a rendered [`PageView`] always reflects the fully applied
/// store → filter → sort → page pipeline.
///
/// # Example
///
/// ```
/// use fleet_table::AssetTable;
/// use fleet_table::model::{Asset, Column};
///
/// let mut table = AssetTable::new();
/// table.replace_dataset(vec![
///     Asset { id: 2, name: "Crane".into(), ..Asset::default() },
///     Asset { id: 1, name: "Bulldozer".into(), ..Asset::default() },
/// ]);
/// table.sort_requested(Column::Name);
///
/// let page = table.visible();
/// assert_eq!(page.rows[0].name, "Bulldozer");
/// assert_eq!(page.empty_rows, 18);
/// ```
pub struct AssetTable {
    /// The full dataset as last supplied by the host.
    dataset: Vec<Asset>,
    /// The filtered subset currently feeding the view.
    displayed: Vec<Asset>,
    search: String,
    sort: SortState,
    page: usize,
    page_size: PageSize,
    selected: Option<Asset>,
    on_select: Option<SelectionCallback>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self {
            dataset: Vec::new(),
            displayed: Vec::new(),
            search: String::new(),
            sort: SortState::default(),
            page: 0,
            page_size: PageSize::default(),
            selected: None,
            on_select: None,
        }
    }

    /// Registers the collaborator notified of the selected row whenever the
    /// dataset is replaced.
    pub fn with_on_select(mut self, callback: impl FnMut(Option<&Asset>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Replaces the dataset.
    ///
    /// Atomically with respect to the next [`visible`](Self::visible) call:
    /// clears the search, restores the displayed set to the full new
    /// dataset, selects the first row (none for an empty dataset), resets
    /// the page index to zero so the view cannot be stranded on an
    /// out-of-range page, and notifies the selection callback.
    pub fn replace_dataset(&mut self, dataset: Vec<Asset>) {
        debug!("dataset replaced: {} rows", dataset.len());
        self.dataset = dataset;
        self.search.clear();
        self.displayed = self.dataset.clone();
        self.selected = self.dataset.first().cloned();
        self.page = 0;
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(self.selected.as_ref());
        }
    }

    /// Applies a search query.
    ///
    /// The filter always runs against the full dataset, never a previously
    /// filtered result, so narrowing then widening the query behaves
    /// correctly and clearing it restores the complete set.
    pub fn search_changed(&mut self, query: &str) {
        self.search = query.to_string();
        self.displayed = query::search(&self.dataset, query);
        debug!(
            "search '{}': {} of {} rows",
            self.search,
            self.displayed.len(),
            self.dataset.len()
        );
    }

    /// Clears the search, restoring the full dataset to the view.
    pub fn clear_search(&mut self) {
        self.search_changed("");
    }

    /// Applies a sort-header request for `column`.
    pub fn sort_requested(&mut self, column: Column) {
        self.sort.request(column);
        debug!("sort: {} {:?}", self.sort.column, self.sort.direction);
    }

    /// Moves to `page`. Out-of-range indices are clipped by the page slice
    /// rather than rejected here.
    pub fn page_changed(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the rows-per-page choice, resetting to the first page so the
    /// current index cannot land out of range.
    pub fn page_size_changed(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 0;
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Computes the currently visible page: the displayed (filtered) rows,
    /// stably sorted by the active key, windowed to the current page.
    pub fn visible(&self) -> PageView {
        let sorted = query::stable_sort(&self.displayed, self.sort.column, self.sort.direction);
        page_slice(&sorted, self.page, self.page_size)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The full dataset as last supplied.
    pub fn dataset(&self) -> &[Asset] {
        &self.dataset
    }

    /// The filtered subset feeding the view.
    pub fn displayed(&self) -> &[Asset] {
        &self.displayed
    }

    /// The active search query.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The active comparator key and direction.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// The zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The rows-per-page choice.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The selected row, set to the first row of each newly supplied
    /// dataset.
    pub fn selected(&self) -> Option<&Asset> {
        self.selected.as_ref()
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AssetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetTable")
            .field("dataset", &self.dataset.len())
            .field("displayed", &self.displayed.len())
            .field("search", &self.search)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("selected", &self.selected.as_ref().map(|a| a.id))
            .finish()
    }
}
