use derive_more::{Display, Error};

/// An operation needed at least one element, but the container it was called on was empty.
///
/// The container is left unchanged whenever this error is returned.
#[derive(Debug, Display, Error, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[display("Operation requires at least one element, but the container is empty!")]
pub struct EmptyContainer;

/// The length of a container would exceed [`usize::MAX`].
#[derive(Debug, Display, Error, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
