//! View window

mod page;

pub use page::*;
