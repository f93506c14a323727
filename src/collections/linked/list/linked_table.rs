use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::num::NonZero;

use log::trace;

use super::{IntoIter, Iter, Link, Node, NodeRef, ValuesMut};
use crate::collections::entry::{Added, Entry};
use crate::collections::sort::{self, SortOrder};
use crate::collections::traits::Association;
use crate::collections::value::TableValue;
#[doc(inline)]
pub use crate::util::error::{EmptyName, IndexOutOfBounds, NoElements};
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An ordered table of name/value pairs with unique names, stored as a doubly linked list.
///
/// This offers the same contract as
/// [`ResizableTable`](crate::collections::contiguous::ResizableTable), minus the notion of
/// capacity: every entry is a separate heap allocation, so there is nothing to grow and nothing to
/// compact. The price is paid on positional access, which has to walk the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `i`: The index of the entry in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(n)` |
/// | `lookup` / `lookup_index` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `get_ith` / `remove_ith` | `O(min(i, n-i))` |
/// | `insert_first` / `insert_last` | `O(1)` |
/// | `remove_first` / `remove_last` | `O(1)` |
/// | `sort` / `sort_by_value` | `O(n log n)` |
pub struct LinkedTable<V> {
    pub(crate) state: ListState<V>,
    pub(crate) _phantom: PhantomData<Box<Node<V>>>,
}

pub(crate) enum ListState<V> {
    Empty,
    Full(ListContents<V>),
}

use ListState::*;

pub(crate) struct ListContents<V> {
    pub len: NonZero<usize>,
    pub head: NodeRef<V>,
    pub tail: NodeRef<V>,
}

impl<V> LinkedTable<V> {
    /// Creates a new, empty LinkedTable.
    pub const fn new() -> LinkedTable<V> {
        LinkedTable {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of entries in the table.
    #[doc(alias = "number_elements")]
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Adds the provided pair. If an entry called `name` already exists, its value is replaced and
    /// the previous value returned in [`Added::Replaced`]. Otherwise the pair is appended.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::{linked::LinkedTable, Added};
    /// let mut list = LinkedTable::new();
    /// list.add("George", String::from("23 Oak St"));
    /// list.add("Peter", String::from("27 Oak St"));
    /// let previous = list.add("George", String::from("289 Pine St"));
    /// assert_eq!(previous, Added::Replaced(String::from("23 Oak St")));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn add(&mut self, name: impl Into<String>, value: V) -> Added<V> {
        self.try_add(name, value).throw()
    }

    /// The same as [`add`](LinkedTable::add), but returns an [`Err`] for an empty `name` rather
    /// than panicking.
    pub fn try_add(&mut self, name: impl Into<String>, value: V) -> Result<Added<V>, EmptyName> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmptyName);
        }

        Ok(match self.find(&name) {
            Some((_, node)) => Added::Replaced(mem::replace(&mut node.entry_mut().value, value)),
            None => {
                self.insert_last(name, value);
                Added::Inserted
            },
        })
    }

    /// Returns a reference to the value of the first entry called `name`.
    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.find(name).map(|(_, node)| &node.entry().value)
    }

    /// Returns a mutable reference to the value of the first entry called `name`.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut V> {
        self.find(name).map(|(_, node)| &mut node.entry_mut().value)
    }

    /// Returns the position of the first entry called `name`.
    pub fn lookup_index(&self, name: &str) -> Option<usize> {
        self.find(name).map(|(index, _)| index)
    }

    /// Returns true if an entry called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Removes the first entry called `name` and returns it. Nothing happens if there is no such
    /// entry.
    pub fn remove(&mut self, name: &str) -> Option<Entry<V>> {
        let (_, node) = self.find(name)?;
        Some(self.unlink(node))
    }

    /// Returns the name and value of the entry at `index`, walking from whichever end of the list
    /// is closer.
    pub fn get_ith(&self, index: usize) -> Result<(&str, &V), IndexOutOfBounds> {
        let entry = self.checked_seek(index)?.entry();
        Ok((entry.name.as_str(), &entry.value))
    }

    /// Removes the entry at `index` and returns it.
    pub fn remove_ith(&mut self, index: usize) -> Result<Entry<V>, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Removes the first entry and returns it.
    pub fn remove_first(&mut self) -> Result<Entry<V>, NoElements> {
        match self.state {
            Empty => Err(NoElements),
            Full(ListContents { head, .. }) => Ok(self.unlink(head)),
        }
    }

    /// Removes the last entry and returns it.
    pub fn remove_last(&mut self) -> Result<Entry<V>, NoElements> {
        match self.state {
            Empty => Err(NoElements),
            Full(ListContents { tail, .. }) => Ok(self.unlink(tail)),
        }
    }

    /// Inserts the pair at the front of the list, without checking whether the name already
    /// exists.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn insert_first(&mut self, name: impl Into<String>, value: V) {
        self.try_insert_first(name, value).throw()
    }

    /// The same as [`insert_first`](LinkedTable::insert_first), but returns an [`Err`] for an
    /// empty `name` rather than panicking. The list is left unchanged in that case.
    pub fn try_insert_first(&mut self, name: impl Into<String>, value: V) -> Result<(), EmptyName> {
        let entry = Entry::new(name, value);
        if entry.name.is_empty() {
            return Err(EmptyName);
        }

        match &mut self.state {
            Empty => self.state = ListState::single(entry),
            Full(contents) => contents.push_front(entry),
        }
        Ok(())
    }

    /// Appends the pair to the back of the list, without checking whether the name already
    /// exists.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn insert_last(&mut self, name: impl Into<String>, value: V) {
        self.try_insert_last(name, value).throw()
    }

    /// The same as [`insert_last`](LinkedTable::insert_last), but returns an [`Err`] for an empty
    /// `name` rather than panicking.
    pub fn try_insert_last(&mut self, name: impl Into<String>, value: V) -> Result<(), EmptyName> {
        let entry = Entry::new(name, value);
        if entry.name.is_empty() {
            return Err(EmptyName);
        }

        match &mut self.state {
            Empty => self.state = ListState::single(entry),
            Full(contents) => contents.push_back(entry),
        }
        Ok(())
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        drop(LinkedTable {
            state: mem::replace(&mut self.state, Empty),
            _phantom: PhantomData,
        });
    }

    /// Sorts the entries by name, comparing byte-wise. Nodes are relinked rather than moved, and
    /// entries with equal names keep their relative order.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::{linked::LinkedTable, SortOrder};
    /// let mut list = LinkedTable::new();
    /// list.add("c", 1);
    /// list.add("a", 2);
    /// list.add("b", 3);
    /// list.sort(SortOrder::Ascending);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [("a", &2), ("b", &3), ("c", &1)]);
    /// ```
    pub fn sort(&mut self, order: SortOrder) {
        trace!("sorting {} list entries by name, {order}", self.len());

        let nodes = self.nodes();
        let names: Vec<&[u8]> = nodes.iter().map(|node| node.entry().name.as_bytes()).collect();
        let permutation = sort::permutation(&names, order);
        self.relink(&nodes, &permutation);
    }

    /// Returns an iterator over `(name, value)` pairs, in order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to every value, in order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        let (front, len) = match self.state {
            Empty => (None, 0),
            Full(ListContents { len, head, .. }) => (Some(head), len.get()),
        };
        ValuesMut {
            front,
            len,
            _phantom: PhantomData,
        }
    }

    /// Finds the first node called `name`, along with its index.
    pub(crate) fn find(&self, name: &str) -> Option<(usize, NodeRef<V>)> {
        let mut curr = self.state.head();
        let mut index = 0;
        while let Some(node) = curr {
            if node.entry().name == name {
                return Some((index, node));
            }
            curr = node.next();
            index += 1;
        }
        None
    }

    /// Collects handles to every node, in order.
    pub(crate) fn nodes(&self) -> Vec<NodeRef<V>> {
        let mut nodes = Vec::with_capacity(self.len());
        let mut curr = self.state.head();
        while let Some(node) = curr {
            nodes.push(node);
            curr = node.next();
        }
        nodes
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<V>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Detaches `node` from the list and takes ownership of its entry. `node` must belong to this
    /// list.
    pub(crate) fn unlink(&mut self, node: NodeRef<V>) -> Entry<V> {
        if let Full(contents) = &mut self.state {
            match NonZero::new(contents.len.get() - 1) {
                Some(new_len) => {
                    contents.len = new_len;

                    match node.prev() {
                        Some(prev) => prev.set_next(node.next()),
                        None => if let Some(next) = node.next() {
                            contents.head = next;
                        },
                    }
                    match node.next() {
                        Some(next) => next.set_prev(node.prev()),
                        None => if let Some(prev) = node.prev() {
                            contents.tail = prev;
                        },
                    }
                },
                None => self.state = Empty,
            }
        }

        // SAFETY: The node belonged to this list and has just been detached, so nothing else
        // refers to it.
        unsafe { node.take_node() }.entry
    }

    /// Relinks `nodes` in the order given by `permutation`, which must cover every node exactly
    /// once.
    pub(crate) fn relink(&mut self, nodes: &[NodeRef<V>], permutation: &[usize]) {
        let Full(contents) = &mut self.state else {
            return;
        };

        let mut prev: Link<V> = None;
        for &index in permutation {
            let node = nodes[index];
            node.set_prev(prev);
            match prev {
                Some(prev) => prev.set_next(Some(node)),
                None => contents.head = node,
            }
            prev = Some(node);
        }

        if let Some(last) = prev {
            last.set_next(None);
            contents.tail = last;
        }
    }

    #[allow(clippy::unwrap_used)]
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none());
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl LinkedTable<i64> {
    /// Sorts the entries by their integer value. Entries with equal values keep their relative
    /// order.
    pub fn sort_by_value(&mut self, order: SortOrder) {
        trace!("sorting {} list entries by value, {order}", self.len());

        let nodes = self.nodes();
        let values: Vec<i64> = nodes.iter().map(|node| node.entry().value).collect();
        let permutation = sort::permutation(&values, order);
        self.relink(&nodes, &permutation);
    }
}

impl<V> ListContents<V> {
    pub fn seek(&self, index: usize) -> NodeRef<V> {
        if index < self.len.get() / 2 {
            Self::walk(self.head, index, NodeRef::next)
        } else {
            Self::walk(self.tail, self.last_index() - index, NodeRef::prev)
        }
    }

    fn walk(mut node: NodeRef<V>, count: usize, step: fn(NodeRef<V>) -> Link<V>) -> NodeRef<V> {
        for _ in 0..count {
            match step(node) {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    pub fn push_front(&mut self, entry: Entry<V>) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            entry,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, entry: Entry<V>) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            entry,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(entry: Entry<V>) -> ListContents<V> {
        let node = NodeRef::from_node(Node {
            entry,
            prev: None,
            next: None,
        });

        ListContents {
            len: NonZero::<usize>::MIN,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<V> ListState<V> {
    pub fn single(entry: Entry<V>) -> ListState<V> {
        Full(ListContents::wrap_one(entry))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn head(&self) -> Link<V> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub const fn tail(&self) -> Link<V> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }
}

impl<V> Association<V> for LinkedTable<V> {
    type Iter<'a> = Iter<'a, V> where V: 'a;

    fn len(&self) -> usize {
        LinkedTable::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedTable::iter(self)
    }

    fn add(&mut self, name: impl Into<String>, value: V) -> Added<V> {
        LinkedTable::add(self, name, value)
    }

    fn insert_last(&mut self, name: impl Into<String>, value: V) {
        LinkedTable::insert_last(self, name, value);
    }

    fn clear(&mut self) {
        LinkedTable::clear(self);
    }

    fn lookup<'a>(&'a self, name: &str) -> Option<&'a V> {
        LinkedTable::lookup(self, name)
    }

    /// Records are added with [`add`](LinkedTable::add), so a later record replaces the value of
    /// an earlier one with the same name.
    fn load_record(&mut self, name: String, value: V) {
        self.add(name, value);
    }
}

impl<V> Extend<(String, V)> for LinkedTable<V> {
    /// Adds every pair with [`add`](LinkedTable::add).
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for LinkedTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut list = LinkedTable::new();
        list.extend(iter);
        list
    }
}

impl<V> Default for LinkedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LinkedTable<V> {
    fn drop(&mut self) {
        let mut curr = self.state.head();
        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: Each node is visited exactly once and the list is never used again.
            drop(unsafe { node.take_node() });
        }
    }
}

// SAFETY: LinkedTable uniquely owns its nodes, so sending it sends every entry with it.
unsafe impl<V: Send> Send for LinkedTable<V> {}
// SAFETY: LinkedTable's safe API only gives out shared references through &self, so no interior
// mutability is exposed.
unsafe impl<V: Sync> Sync for LinkedTable<V> {}

impl<V: Clone> Clone for LinkedTable<V> {
    fn clone(&self) -> Self {
        let mut list = LinkedTable::new();
        for (name, value) in self.iter() {
            list.insert_last(name, value.clone());
        }
        list
    }
}

impl<V: PartialEq> PartialEq for LinkedTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for LinkedTable<V> {}

impl<V: Debug> Debug for LinkedTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Entries<'a, V>(&'a LinkedTable<V>);

        impl<V: Debug> Debug for Entries<'_, V> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("LinkedTable")
            .field("entries", &Entries(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<V: TableValue> Display for LinkedTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== List =====")?;
        writeln!(f, "nElements={}", self.len())?;
        for (name, value) in self.iter() {
            write!(f, "name=\"{name}\" value=")?;
            value.fmt_listing(f)?;
            writeln!(f)?;
        }
        write!(f, "======== End List =======")
    }
}

impl<V> IntoIterator for LinkedTable<V> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, V> IntoIterator for &'a LinkedTable<V> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            front: self.state.head(),
            back: self.state.tail(),
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}
