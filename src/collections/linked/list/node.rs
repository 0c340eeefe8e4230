use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// One of the two ends of a list. Most list operations are written once and pointed at an end,
/// rather than written twice with `head`/`next` swapped for `tail`/`prev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

// NOTE: Nodes are allocated through Box<T> so that a node can be moved back out of the heap in
// one piece when it is unlinked.

/// A non-owning handle to a node. The owning [`LinkedList`](super::LinkedList) is responsible for
/// freeing every node exactly once, handles themselves never free anything when dropped.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    /// Back-reference, used for navigation only.
    pub prev: Link<T>,
    pub next: Link<T>,
}

// The accessors below return references with an unbounded lifetime. Every call site ties that
// lifetime back to a borrow of the list that owns the node.
impl<T> NodePtr<T> {
    /// Allocates an unlinked node.
    pub fn lone(value: T) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: None,
        }))))
    }

    /// Links `front` and `back` to each other, with `front` directly before `back`.
    pub fn join(front: NodePtr<T>, back: NodePtr<T>) {
        *front.next_mut() = Some(back);
        *back.prev_mut() = Some(front);
    }

    /// Moves the node out of its allocation and frees it.
    ///
    /// # Safety
    /// The node must still be allocated, and no other handle to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in lone and, according to the caller,
        // hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A handle is only dereferenced while the owning list keeps the node alive.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: A handle is only dereferenced while the owning list keeps the node alive, and
        // the list hands out at most one mutable reference to each value at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// The link pointing away from `end`, towards the rest of the list.
    pub const fn inward<'a>(&self, end: End) -> &'a Link<T> {
        match end {
            End::Front => self.next(),
            End::Back => self.prev(),
        }
    }

    /// The link pointing past `end`, which must be empty for the node at that end.
    #[allow(clippy::mut_from_ref)]
    pub const fn outward_mut<'a>(&self, end: End) -> &'a mut Link<T> {
        match end {
            End::Front => self.prev_mut(),
            End::Back => self.next_mut(),
        }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: See value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: See value_mut. Links are only rewritten by the list itself.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: See value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: See value_mut. Links are only rewritten by the list itself.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
