//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as pointers, ownership, heaps and iterators.
//!
//! # Method
//! [`LinkedList`](linked::LinkedList) and [`PriorityQueue`](heap::PriorityQueue) are fully
//! independent of each other. The adapters ([`Stack`](adapters::Stack) and
//! [`Queue`](adapters::Queue)) only restrict the interface of a LinkedList. Every type implements
//! the shared [`Container`](traits::Container) trait.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "adapters")]
#[doc(inline)]
pub use adapters::{Queue, Stack};
#[cfg(feature = "heap")]
#[doc(inline)]
pub use heap::PriorityQueue;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use linked::LinkedList;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use traits::Container;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
