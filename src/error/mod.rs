//! Error types

mod column;
mod dataset;

pub use column::*;
pub use dataset::*;
