use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::traits::Container;
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugIter;

/// A last-in first-out container adapter, backed by a [`LinkedList`].
///
/// The top of the stack is the back of the underlying list, so every operation is `O(1)`.
pub struct Stack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Places an element on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the element on top of the Stack and returns it.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.list.pop_back()
    }

    /// Returns a reference to the element on top of the Stack.
    pub fn top(&self) -> Result<&T, EmptyContainer> {
        self.list.back()
    }

    /// Returns a mutable reference to the element on top of the Stack.
    pub fn top_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.list.back_mut()
    }

    /// Removes every element from the Stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Container for Stack<T> {
    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }

    fn clear(&mut self) {
        Stack::clear(self)
    }
}

/// Pushes each element in turn, so the last element of the iterator ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_first", &DebugIter(self.list.iter().rev()))
            .field("len", &self.len())
            .finish()
    }
}

/// Renders the elements from the top down, as `Stack[top, .., bottom]`.
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack[")?;
        for (index, item) in self.list.iter().rev().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
