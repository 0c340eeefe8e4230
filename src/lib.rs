//! This crate is my take on the container adapter layer of a standard container library: a doubly
//! linked list, a binary heap priority queue, and the stack and queue adapters that sit on top of
//! them.
//!
//! # Purpose
//! This repo / crate is a learning project, with no expectation for it to be used in production.
//! The linked list and the heap are the two containers here with real internal invariants to keep
//! (symmetric links and heap order), which is exactly what makes them worth writing by hand.
//!
//! # Method
//! The APIs take a lot of inspiration from [`std`], but the implementations are my own. The
//! [`LinkedList`](collections::linked::LinkedList) manages its own node allocations through raw
//! pointers, while the [`PriorityQueue`](collections::heap::PriorityQueue) keeps a [`Vec`] as its
//! heap storage, because an implicit binary tree is nothing more than a contiguous buffer.
//!
//! # Error Handling
//! Every operation that needs at least one element (`pop`, `front`, `top` and so on) returns a
//! [`Result`] with the [`EmptyContainer`](collections::EmptyContainer) error rather than
//! panicking. A failed call never modifies the container, so the error is always recoverable.
//!
//! Errors are strongly typed ZSTs that implement [`Error`](std::error::Error). The one case
//! where the crate panics instead is a length overflow, which would require more nodes than the
//! address space can hold.
//!
//! # Dependencies
//! The library depends on `derive_more` for its derive macros, because they remove the need for
//! some very repetitive programming. The remaining dependencies are optional, the `demo` feature
//! enables them for the demo binary.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
