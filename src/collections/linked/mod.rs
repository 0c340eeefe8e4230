//! Linked collection types. At the moment, this is just the doubly linked [`LinkedList`], which
//! also backs the [`adapters`](super::adapters).

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
