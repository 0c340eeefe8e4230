/// An ordering that decides which of two elements leaves a [`PriorityQueue`](super::PriorityQueue)
/// first.
///
/// `outranks(a, b)` must return true if and only if `a` has to be retrieved before `b`. The
/// relation has to behave like a strict weak ordering: it must be irreflexive and transitive, and
/// elements that don't outrank each other are treated as ties, which can come out in any order.
///
/// Any `Fn(&T, &T) -> bool` implements this trait, so a closure can be passed directly. Because
/// the closure isn't passed to a function expecting an [`Fn`], its parameter types need to be
/// written out:
/// ```
/// # use stl_containers::collections::heap::PriorityQueue;
/// let mut queue: PriorityQueue<(u8, char), _> =
///     PriorityQueue::with_ordering(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
/// queue.push((2, 'b'));
/// queue.push((1, 'a'));
/// assert_eq!(queue.pop(), Ok((1, 'a')));
/// ```
pub trait Compare<T> {
    /// Returns true if `a` has a strictly higher priority than `b`.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// The default ordering, the greatest element according to [`Ord`] is retrieved first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord> Compare<T> for MaxFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// The least element according to [`Ord`] is retrieved first, turning the queue into a min-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord> Compare<T> for MinFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F: Fn(&T, &T) -> bool> Compare<T> for F {
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
