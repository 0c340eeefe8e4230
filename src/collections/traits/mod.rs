//! Traits shared by the collection types in this crate.

mod container;

pub use container::*;
