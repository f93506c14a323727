use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, LinkedTable};
use crate::collections::entry::Entry;

/// A borrowed iterator over the `(name, value)` pairs of a [`LinkedTable`].
pub struct Iter<'a, V> {
    // The iterator never modifies the nodes, it just walks inwards from both ends and uses len to
    // know when the two ends have met.
    pub(crate) front: Link<V>,
    pub(crate) back: Link<V>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.front = node.next();
        self.len -= 1;

        let entry: &'a Entry<V> = node.entry();
        Some((entry.name.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.back?;
        self.back = node.prev();
        self.len -= 1;

        let entry = node.entry();
        Some((entry.name.as_str(), &entry.value))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// Mutable access to every value of a [`LinkedTable`], in order.
pub struct ValuesMut<'a, V> {
    pub(crate) front: Link<V>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.front = node.next();
        self.len -= 1;

        // Each node is yielded once, so the mutable references never alias.
        let entry: &'a mut Entry<V> = node.entry_mut();
        Some(&mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct IntoIter<V> {
    // There is no point rewriting the unlinking logic when the iterator can just hold the list and
    // call remove_first/remove_last.
    pub(crate) list: LinkedTable<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok().map(Entry::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok().map(Entry::into_parts)
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

// SAFETY: Iter only hands out shared references to entries.
unsafe impl<V: Sync> Send for Iter<'_, V> {}
// SAFETY: As above.
unsafe impl<V: Sync> Sync for Iter<'_, V> {}
