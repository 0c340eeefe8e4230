use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use super::{Compare, IntoIterSorted, MaxFirst};
use crate::collections::traits::Container;
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugIter;
use crate::util::option::OptionExtension;

/// A priority queue, stored as a binary heap.
///
/// The heap is a complete binary tree laid out level by level in a [`Vec`], so the parent of the
/// element at position `i` sits at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. No
/// element outranks its parent according to the queue's [`Compare`] ordering, which means the
/// root is always the element that should be retrieved next.
///
/// By default ([`MaxFirst`]) the greatest element is retrieved first. The same ordering is used
/// for every comparison the queue makes, regardless of the element type.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `top` | `O(1)` |
/// | `push` | `O(log n)` |
/// | `pop` | `O(log n)` |
///
/// # Ties
/// Elements that don't outrank each other are retrieved in an unspecified order, the queue is
/// not stable.
#[derive(Clone)]
pub struct PriorityQueue<T, C = MaxFirst> {
    pub(crate) storage: Vec<T>,
    pub(crate) ordering: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new, empty max-priority queue.
    pub const fn new() -> PriorityQueue<T> {
        PriorityQueue::with_ordering(MaxFirst)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue that retrieves elements according to `ordering`.
    pub const fn with_ordering(ordering: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            storage: Vec::new(),
            ordering,
        }
    }

    /// Creates a PriorityQueue using `ordering`, pushing each element of `iter` in turn.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, ordering: C) -> PriorityQueue<T, C> {
        let mut queue = PriorityQueue::with_ordering(ordering);
        queue.extend(iter);
        queue
    }

    /// Returns the number of elements in the PriorityQueue.
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the ordering used by this PriorityQueue.
    pub const fn ordering(&self) -> &C {
        &self.ordering
    }

    /// Returns a reference to the element with the highest priority, without removing it.
    pub fn top(&self) -> Result<&T, EmptyContainer> {
        self.storage.first().ok_or(EmptyContainer)
    }

    /// Adds an element to the PriorityQueue.
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Removes the element with the highest priority and returns it.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        let last = self.storage.len().checked_sub(1).ok_or(EmptyContainer)?;
        self.storage.swap(0, last);
        // SAFETY: The storage was checked to be non-empty above.
        let value = unsafe { self.storage.pop().unreachable() };
        self.sift_down(0);
        Ok(value)
    }

    /// Removes every element from the PriorityQueue.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns an iterator over the elements in storage order, which is **not** priority order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Consumes the PriorityQueue, returning an iterator that yields elements in the order they
    /// would be popped.
    pub const fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted {
            queue: self,
        }
    }

    /// Moves the element at `pos` towards the root for as long as it outranks its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.ordering.outranks(&self.storage[pos], &self.storage[parent]) {
                break;
            }
            self.storage.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` towards the leaves, swapping it with its highest priority child
    /// for as long as that child outranks it.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;

            if left < len && self.ordering.outranks(&self.storage[left], &self.storage[best]) {
                best = left;
            }
            if right < len && self.ordering.outranks(&self.storage[right], &self.storage[best]) {
                best = right;
            }

            if best == pos {
                break;
            }
            self.storage.swap(pos, best);
            pos = best;
        }
    }

    /// Checks that no element outranks its parent.
    #[cfg(test)]
    pub(crate) fn verify_heap_order(&self) {
        for pos in 1..self.storage.len() {
            let parent = (pos - 1) / 2;
            assert!(
                !self.ordering.outranks(&self.storage[pos], &self.storage[parent]),
                "Element at {pos} shouldn't outrank its parent at {parent}."
            );
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, C> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T, C: Compare<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        PriorityQueue::with_ordering(C::default())
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates over the elements in storage order, use
    /// [`into_iter_sorted`](PriorityQueue::into_iter_sorted) for priority order.
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("storage", &DebugIter(self.storage.iter()))
            .field("len", &self.storage.len())
            .finish()
    }
}

/// Renders the elements in storage (heap) order, as `PriorityQueue[a, b, c]`. Only the first
/// element is guaranteed to be the one with the highest priority.
impl<T: Display, C> Display for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityQueue[")?;
        for (index, item) in self.storage.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T, C: Compare<T>> Container for PriorityQueue<T, C> {
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }
}
