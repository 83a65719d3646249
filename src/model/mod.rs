//! Typed row model

mod asset;
mod column;
mod dataset;
mod value;

pub use asset::*;
pub use column::*;
pub use dataset::*;
pub use value::*;
