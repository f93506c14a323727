#[cfg(feature = "persist")]
use std::path::Path;

use crate::collections::entry::Added;
#[cfg(feature = "persist")]
use crate::collections::value::TableValue;
#[cfg(feature = "persist")]
use crate::persist::{self, LoadError, SaveError};

/// An ordered collection of name/value pairs where each name is expected to appear once.
///
/// Lookups compare names byte-wise and return the first match. Uniqueness is maintained by
/// [`add`](Association::add), but not by [`insert_last`](Association::insert_last), which appends
/// unconditionally.
pub trait Association<V>: Sized {
    type Iter<'a>: Iterator<Item = (&'a str, &'a V)> where Self: 'a, V: 'a;

    /// Returns the number of entries in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all entries, in order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Adds the pair, replacing the value of an existing entry with the same name.
    fn add(&mut self, name: impl Into<String>, value: V) -> Added<V>;

    /// Appends the pair without checking whether the name already exists. Names must still be
    /// non-empty.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    fn insert_last(&mut self, name: impl Into<String>, value: V);

    /// Removes all entries.
    fn clear(&mut self);

    /// Returns a reference to the value of the first entry called `name`.
    fn lookup<'a>(&'a self, name: &str) -> Option<&'a V> {
        self.iter().find(|(entry_name, _)| *entry_name == name).map(|(_, value)| value)
    }

    /// Returns the position of the first entry called `name`.
    fn lookup_index(&self, name: &str) -> Option<usize> {
        self.iter().position(|(entry_name, _)| entry_name == name)
    }

    /// Returns true if an entry called `name` exists.
    fn contains(&self, name: &str) -> bool {
        self.lookup_index(name).is_some()
    }

    /// Stores one record read by [`load`](Association::load). Appends via
    /// [`insert_last`](Association::insert_last) unless overridden.
    fn load_record(&mut self, name: String, value: V) {
        self.insert_last(name, value);
    }

    /// Writes every entry, in order, to the file at `path`, replacing its contents. See
    /// [`persist`] for the format.
    #[cfg(feature = "persist")]
    fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError>
    where
        V: TableValue,
    {
        persist::save(self, path.as_ref())
    }

    /// Replaces the contents of the collection with the records in the file at `path`, returning
    /// the number of records read.
    ///
    /// The collection is only cleared once the file has been opened. If a record turns out to be
    /// truncated or malformed, the error is returned and every record before it remains in the
    /// collection.
    #[cfg(feature = "persist")]
    fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError>
    where
        V: TableValue,
    {
        persist::load(self, path.as_ref())
    }
}
