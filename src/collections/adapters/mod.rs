//! Container adapters that restrict a [`LinkedList`](super::linked::LinkedList) to a single
//! access pattern: [`Stack`] for last-in first-out and [`Queue`] for first-in first-out.
//!
//! Both types are also re-exported under the parent module.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
