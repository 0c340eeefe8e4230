use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{End, Iter, IterMut, Length, NodePtr, ONE};
use crate::collections::traits::Container;
use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::fmt::DebugIter;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// Every node is its own allocation, so `clear` (and dropping the list) has to visit and free
/// each one of them.
///
/// # Ownership
/// The list owns all of its nodes. Each node's `prev` link is a back-reference that is only ever
/// used to navigate or unlink, never to decide when a node is freed. Cloning a LinkedList creates
/// a deep copy with its own nodes, there is no way to create two lists sharing a node.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

// SAFETY: The list uniquely owns its nodes, so sending it is no different to sending the owned
// values.
unsafe impl<T: Send> Send for LinkedList<T> {}

// SAFETY: Shared access to the list only ever hands out shared references to values.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.state.end(End::Front).map(|node| node.value())
    }

    /// Returns a mutable reference to the first element in the list.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.state.end(End::Front).map(|node| node.value_mut())
    }

    /// Returns a reference to the last element in the list.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.state.end(End::Back).map(|node| node.value())
    }

    /// Returns a mutable reference to the last element in the list.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.state.end(End::Back).map(|node| node.value_mut())
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        self.push_end(End::Front, value);
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        self.push_end(End::Back, value);
    }

    /// Removes the first element from the list and returns it.
    pub fn pop_front(&mut self) -> Result<T, EmptyContainer> {
        self.pop_end(End::Front)
    }

    /// Removes the last element from the list and returns it.
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        self.pop_end(End::Back)
    }

    fn push_end(&mut self, end: End, value: T) {
        match &mut self.state {
            Empty => self.state = Full(ListContents::lone(value)),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::lone(value);
                let old = contents.end_mut(end);
                match end {
                    End::Front => NodePtr::join(node, *old),
                    End::Back => NodePtr::join(*old, node),
                }
                *old = node;
            },
        }
    }

    fn pop_end(&mut self, end: End) -> Result<T, EmptyContainer> {
        let node = self.state.step(end).ok_or(EmptyContainer)?;
        if let Full(contents) = &self.state {
            *contents.end(end).outward_mut(end) = None;
        }

        // SAFETY: The list no longer reaches the node from either its ends or its links, so this
        // is the only remaining handle.
        Ok(unsafe { node.take_node() }.value)
    }

    /// Removes and drops every element in the list, leaving it empty.
    pub fn clear(&mut self) {
        while let Some(node) = self.state.step(End::Front) {
            // SAFETY: step has already moved the list past the node, and the remaining nodes are
            // only ever reached from the new front, never back through this one.
            drop(unsafe { node.take_node() });
        }
    }

    /// Moves all elements of `other` onto the back of this list, in `O(1)`.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let Full(rest) = mem::replace(&mut other.state, Empty) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(rest),
            Full(contents) => {
                contents.len = contents.len
                    .checked_add(rest.len.get())
                    .ok_or(CapacityOverflow)
                    .throw();

                NodePtr::join(contents.tail, rest.head);
                contents.tail = rest.tail;
            },
        }
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any element in the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    /// Walks the list in both directions and checks that every link is mirrored, that the ends
    /// are terminated and that the stored length matches the number of nodes.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "Head should have no previous node.");
                assert!(tail.next().is_none(), "Tail should have no next node.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(*next.prev().as_ref().unwrap() == curr, "Links should be symmetric.");
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "Following next from head should end at tail.");
                assert_eq!(count, len.get(), "Length should match the number of nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn lone(value: T) -> ListContents<T> {
        let node = NodePtr::lone(value);
        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn end(&self, end: End) -> NodePtr<T> {
        match end {
            End::Front => self.head,
            End::Back => self.tail,
        }
    }

    pub const fn end_mut(&mut self, end: End) -> &mut NodePtr<T> {
        match end {
            End::Front => &mut self.head,
            End::Back => &mut self.tail,
        }
    }
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn end(&self, end: End) -> Result<NodePtr<T>, EmptyContainer> {
        match self {
            Empty => Err(EmptyContainer),
            Full(contents) => Ok(contents.end(end)),
        }
    }

    /// Returns the node at `end` and shrinks the range past it, leaving every link untouched.
    ///
    /// The list itself uses this to detach nodes, while the borrowed iterators step a copy of the
    /// state to walk the list from both ends.
    pub fn step(&mut self, end: End) -> Option<NodePtr<T>> {
        let Full(contents) = &mut *self else {
            return None;
        };

        let node = contents.end(end);
        match contents.len.checked_sub(1) {
            Some(new_len) => {
                // SAFETY: More than one node is in range, so the node at this end links inwards
                // to another.
                *contents.end_mut(end) = unsafe { node.inward(end).unreachable() };
                contents.len = new_len;
            },
            None => *self = Empty,
        }

        Some(node)
    }
}

// Copying the state only copies the pointers. This is what the borrowed iterators use to track
// their position, it is never used to create a second owner of the nodes.
impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

/// Renders the elements from front to back, as `LinkedList[front, .., back]`.
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T> Container for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}
