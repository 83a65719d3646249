//! Search and sort over the row store

mod search;
mod sort;

pub use search::*;
pub use sort::*;
