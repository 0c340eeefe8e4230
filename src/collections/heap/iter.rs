use std::iter::FusedIterator;

use super::{Compare, PriorityQueue};

/// An owning iterator that pops elements from a [`PriorityQueue`] in priority order.
///
/// Created by [`PriorityQueue::into_iter_sorted`].
pub struct IntoIterSorted<T, C> {
    pub(crate) queue: PriorityQueue<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}
