//! A module containing [`PriorityQueue`], the orderings it can be built with and its iterators.
//!
//! [`PriorityQueue`] is also re-exported under the parent module.

mod compare;
mod iter;
mod priority_queue;
mod tests;

pub use compare::*;
pub use iter::*;
pub use priority_queue::*;
