//! Fleet table state pipeline
//!
//! The logic behind a sortable, searchable, paginated rental-fleet table:
//! a row store holding the full and filtered datasets, a query engine doing
//! case-insensitive whole-record substring search and stable single-key
//! sorting, and a view window slicing the result into fixed-size pages.
//! Rendering belongs to the host UI; it drives [`AssetTable`] transitions
//! and draws whatever [`AssetTable::visible`] returns.

pub mod error;
pub mod model;
pub mod query;
pub mod view;

mod table;

pub use table::*;
