use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::traits::Container;
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugIter;

/// A first-in first-out container adapter, backed by a [`LinkedList`].
///
/// Elements are pushed onto the back of the list and popped from the front.
pub struct Queue<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds an element to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the element at the front of the Queue (the oldest one) and returns it.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.list.pop_front()
    }

    /// Returns a reference to the element at the front of the Queue, which is the next to be
    /// popped.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.list.front()
    }

    /// Returns a reference to the element at the back of the Queue, which was pushed most
    /// recently.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.list.back()
    }

    /// Removes every element from the Queue.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Container for Queue<T> {
    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }

    fn clear(&mut self) {
        Queue::clear(self)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_first", &DebugIter(self.list.iter()))
            .field("len", &self.len())
            .finish()
    }
}

/// Renders the elements from front to back, as `Queue[front, .., back]`.
impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue[")?;
        for (index, item) in self.list.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
