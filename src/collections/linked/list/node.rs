use std::ptr::NonNull;

use crate::collections::entry::Entry;

pub(crate) type Link<V> = Option<NodeRef<V>>;

// NOTE: Nodes are allocated through Box<Node<V>> and leaked into a NonNull, so that take_node can
// move the whole node back out of the heap.

/// A copyable handle to a node owned by a [`LinkedTable`](super::LinkedTable).
///
/// Every NodeRef reachable from a table points to a live allocation created by
/// [`from_node`](NodeRef::from_node). The accessors below rely on that and on the table's borrow:
/// the returned references are only ever handed out for as long as the owning table is borrowed.
#[derive(Debug)]
pub(crate) struct NodeRef<V>(pub NonNull<Node<V>>);

impl<V> NodeRef<V> {
    pub fn from_node(node: Node<V>) -> NodeRef<V> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, deallocating it.
    ///
    /// # Safety
    /// The node must still be allocated and no other handle to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<V> {
        // SAFETY: The pointer came from Box::leak in from_node and it is up to the caller to ensure
        // it hasn't been freed already.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn entry<'a>(self) -> &'a Entry<V> {
        // SAFETY: The node is live, see the type level docs.
        unsafe { &(*self.0.as_ptr()).entry }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn entry_mut<'a>(self) -> &'a mut Entry<V> {
        // SAFETY: The node is live and the owning table is mutably borrowed by the caller.
        unsafe { &mut (*self.0.as_ptr()).entry }
    }

    pub fn prev(self) -> Link<V> {
        // SAFETY: The node is live, see the type level docs.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<V> {
        // SAFETY: The node is live, see the type level docs.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<V>) {
        // SAFETY: The node is live and links are only rewritten while the table is mutably
        // borrowed.
        unsafe { (*self.0.as_ptr()).prev = link; }
    }

    pub fn set_next(self, link: Link<V>) {
        // SAFETY: The node is live and links are only rewritten while the table is mutably
        // borrowed.
        unsafe { (*self.0.as_ptr()).next = link; }
    }
}

impl<V> Clone for NodeRef<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<V> {}

impl<V> PartialEq for NodeRef<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<V> {
    pub entry: Entry<V>,
    pub prev: Link<V>,
    pub next: Link<V>,
}
