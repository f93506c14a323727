use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::{debug, trace};

use super::{IntoIter, Iter, ValuesMut};
use crate::collections::entry::{Added, Entry};
use crate::collections::sort::{self, SortOrder};
use crate::collections::traits::Association;
use crate::collections::value::TableValue;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyName, IndexOutOfBounds, NoElements};
use crate::util::result::ResultExtension;

/// The capacity of a table created with [`ResizableTable::new`].
pub const INITIAL_CAP: usize = 10;

const GROWTH_FACTOR: usize = 2;

/// An ordered, array-backed table of name/value pairs with unique names.
///
/// Entries are kept in insertion order until the table is sorted. Capacity is tracked explicitly:
/// it starts at [`INITIAL_CAP`] and doubles whenever an insertion finds the table full, so a table
/// filled one entry at a time moves through capacities 10, 20, 40, 80 and so on. Capacity never
/// shrinks, not even when entries are removed or the table is cleared.
///
/// Removing an entry shifts every following entry down by one position, so indices are only stable
/// until the next mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `i`: The index of the entry in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` / `cap` | `O(1)` |
/// | `add` | `O(n)` |
/// | `lookup` / `lookup_index` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `get_ith` | `O(1)` |
/// | `remove_ith` | `O(n-i)` |
/// | `insert_first` | `O(n)` |
/// | `insert_last` | `O(1)`*, `O(n)` |
/// | `sort` / `sort_by_value` | `O(n log n)` |
///
/// \* If the table doesn't have enough capacity for the new entry, `insert_last` will take `O(n)`.
pub struct ResizableTable<V> {
    pub(crate) entries: Vec<Entry<V>>,
    pub(crate) cap: usize,
}

impl<V> ResizableTable<V> {
    /// Creates a new, empty table with a capacity of [`INITIAL_CAP`].
    ///
    /// # Panics
    /// Panics if the initial allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::contiguous::ResizableTable;
    /// let table: ResizableTable<String> = ResizableTable::new();
    /// assert_eq!(table.len(), 0);
    /// assert_eq!(table.cap(), 10);
    /// ```
    pub fn new() -> ResizableTable<V> {
        ResizableTable::with_cap(INITIAL_CAP)
    }

    /// Creates a new, empty table with capacity exactly equal to `cap`. Growth still doubles the
    /// capacity from there, except that a table with capacity 0 grows to [`INITIAL_CAP`].
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn with_cap(cap: usize) -> ResizableTable<V> {
        let mut table = ResizableTable {
            entries: Vec::new(),
            cap: 0,
        };
        table.realloc_with_cap(cap);
        table
    }

    /// Returns the number of entries in the table.
    #[doc(alias = "number_elements")]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the table can hold before it next grows.
    #[doc(alias = "max_elements")]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Adds the provided pair. If an entry called `name` already exists, its value is replaced in
    /// place and the previous value is returned in [`Added::Replaced`]. Otherwise the pair is
    /// appended, growing the table first if it is full.
    ///
    /// # Panics
    /// Panics if `name` is empty or if growing the table fails.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::{contiguous::ResizableTable, Added};
    /// let mut table = ResizableTable::new();
    /// assert_eq!(table.add("George", 23), Added::Inserted);
    /// assert_eq!(table.add("Peter", 27), Added::Inserted);
    /// assert_eq!(table.add("George", 289), Added::Replaced(23));
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.lookup("George"), Some(&289));
    /// ```
    pub fn add(&mut self, name: impl Into<String>, value: V) -> Added<V> {
        self.try_add(name, value).throw()
    }

    /// The same as [`add`](ResizableTable::add), but returns an [`Err`] for an empty `name` rather
    /// than panicking.
    ///
    /// # Panics
    /// Panics if growing the table fails.
    pub fn try_add(&mut self, name: impl Into<String>, value: V) -> Result<Added<V>, EmptyName> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmptyName);
        }

        Ok(match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => Added::Replaced(mem::replace(&mut entry.value, value)),
            None => {
                self.insert_last(name, value);
                Added::Inserted
            },
        })
    }

    /// Returns a reference to the value of the first entry called `name`.
    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value of the first entry called `name`.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.value)
    }

    /// Returns the position of the first entry called `name`.
    pub fn lookup_index(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Returns true if an entry called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup_index(name).is_some()
    }

    /// Removes the first entry called `name` and returns it, shifting all following entries down
    /// by one. Nothing happens if there is no such entry.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::contiguous::ResizableTable;
    /// let mut table: ResizableTable<i64> = ["a", "b", "c"]
    ///     .into_iter()
    ///     .zip(1..)
    ///     .map(|(name, value)| (name.to_owned(), value))
    ///     .collect();
    /// assert_eq!(table.remove("b").map(|entry| entry.value), Some(2));
    /// assert_eq!(table.remove("b"), None);
    /// assert_eq!(table.get_ith(1), Ok(("c", &3)));
    /// ```
    pub fn remove(&mut self, name: &str) -> Option<Entry<V>> {
        let index = self.lookup_index(name)?;
        Some(self.entries.remove(index))
    }

    /// Returns the name and value of the entry at `index`.
    ///
    /// `index` is checked against the number of entries, not the capacity. Slots between `len` and
    /// `cap` are never readable.
    pub fn get_ith(&self, index: usize) -> Result<(&str, &V), IndexOutOfBounds> {
        self.entries
            .get(index)
            .map(|entry| (entry.name.as_str(), &entry.value))
            .ok_or(IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Removes the entry at `index` and returns it, shifting all following entries down by one.
    pub fn remove_ith(&mut self, index: usize) -> Result<Entry<V>, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Removes the first entry and returns it.
    pub fn remove_first(&mut self) -> Result<Entry<V>, NoElements> {
        if self.is_empty() {
            return Err(NoElements);
        }
        Ok(self.entries.remove(0))
    }

    /// Removes the last entry and returns it.
    pub fn remove_last(&mut self) -> Result<Entry<V>, NoElements> {
        self.entries.pop().ok_or(NoElements)
    }

    /// Inserts the pair at the front of the table, moving every other entry up by one.
    ///
    /// There is no check for an existing entry with the same name. Using this method to insert a
    /// duplicate name is allowed, but [`lookup`](ResizableTable::lookup) and friends will only
    /// ever find the first one.
    ///
    /// # Panics
    /// Panics if `name` is empty or if growing the table fails.
    pub fn insert_first(&mut self, name: impl Into<String>, value: V) {
        self.try_insert_first(name, value).throw()
    }

    /// The same as [`insert_first`](ResizableTable::insert_first), but returns an [`Err`] for an
    /// empty `name` rather than panicking. The table is left unchanged in that case.
    ///
    /// # Panics
    /// Panics if growing the table fails.
    pub fn try_insert_first(&mut self, name: impl Into<String>, value: V) -> Result<(), EmptyName> {
        let entry = Self::checked_entry(name, value)?;
        self.reserve_one();
        self.entries.insert(0, entry);
        Ok(())
    }

    /// Appends the pair to the end of the table. As with
    /// [`insert_first`](ResizableTable::insert_first), names aren't checked for uniqueness.
    ///
    /// # Panics
    /// Panics if `name` is empty or if growing the table fails.
    pub fn insert_last(&mut self, name: impl Into<String>, value: V) {
        self.try_insert_last(name, value).throw()
    }

    /// The same as [`insert_last`](ResizableTable::insert_last), but returns an [`Err`] for an
    /// empty `name` rather than panicking.
    ///
    /// # Panics
    /// Panics if growing the table fails.
    pub fn try_insert_last(&mut self, name: impl Into<String>, value: V) -> Result<(), EmptyName> {
        let entry = Self::checked_entry(name, value)?;
        self.reserve_one();
        self.entries.push(entry);
        Ok(())
    }

    /// Removes all entries. The capacity is left unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sorts the entries by name, comparing byte-wise. Entries with equal names (only possible
    /// after [`insert_first`](ResizableTable::insert_first) or
    /// [`insert_last`](ResizableTable::insert_last)) keep their relative order.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::{contiguous::ResizableTable, SortOrder};
    /// let mut table = ResizableTable::new();
    /// table.add("c", 1);
    /// table.add("a", 2);
    /// table.add("b", 3);
    ///
    /// table.sort(SortOrder::Ascending);
    /// assert_eq!(table.iter().collect::<Vec<_>>(), [("a", &2), ("b", &3), ("c", &1)]);
    ///
    /// table.sort(SortOrder::Descending);
    /// assert_eq!(table.iter().collect::<Vec<_>>(), [("c", &1), ("b", &3), ("a", &2)]);
    /// ```
    pub fn sort(&mut self, order: SortOrder) {
        trace!("sorting {} table entries by name, {order}", self.len());

        let names: Vec<&[u8]> = self.entries.iter().map(|entry| entry.name.as_bytes()).collect();
        let permutation = sort::permutation(&names, order);
        sort::apply_permutation(&mut self.entries, &permutation);
    }

    /// Returns an iterator over `(name, value)` pairs, in order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to every value, in order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.entries.iter_mut(),
        }
    }

    pub(crate) fn checked_entry(name: impl Into<String>, value: V) -> Result<Entry<V>, EmptyName> {
        let entry = Entry::new(name, value);
        if entry.name.is_empty() {
            return Err(EmptyName);
        }
        Ok(entry)
    }

    /// Checks that the provided index refers to a live entry.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Ensures there is room for one more entry, growing the table if it is full.
    pub(crate) fn reserve_one(&mut self) {
        if self.len() == self.cap {
            self.grow();
        }
    }

    /// Doubles the capacity of the table. Entries are moved, not copied, so their order and
    /// indices are unaffected.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or can't be allocated.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap {
            0 => INITIAL_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        };

        debug!("growing table capacity from {} to {new_cap}", self.cap);
        self.realloc_with_cap(new_cap);
    }

    /// Makes sure the backing storage can hold `new_cap` entries without reallocating and records
    /// `new_cap` as the capacity of the table.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len());

        let additional = new_cap - self.len();
        self.entries
            .try_reserve_exact(additional)
            .map_err(|_| CapacityOverflow)
            .throw();
        self.cap = new_cap;
    }
}

impl ResizableTable<i64> {
    /// Sorts the entries by their integer value. Entries with equal values keep their relative
    /// order.
    ///
    /// # Examples
    /// ```
    /// # use assoc_collections::collections::{contiguous::ResizableTable, SortOrder};
    /// let mut table: ResizableTable<i64> = ResizableTable::new();
    /// table.add("x", 5);
    /// table.add("y", -1);
    /// table.add("z", 5);
    ///
    /// table.sort_by_value(SortOrder::Descending);
    /// assert_eq!(table.iter().collect::<Vec<_>>(), [("x", &5), ("z", &5), ("y", &-1)]);
    /// ```
    pub fn sort_by_value(&mut self, order: SortOrder) {
        trace!("sorting {} table entries by value, {order}", self.len());

        let values: Vec<i64> = self.entries.iter().map(|entry| entry.value).collect();
        let permutation = sort::permutation(&values, order);
        sort::apply_permutation(&mut self.entries, &permutation);
    }
}

impl<V> Association<V> for ResizableTable<V> {
    type Iter<'a> = Iter<'a, V> where V: 'a;

    fn len(&self) -> usize {
        ResizableTable::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        ResizableTable::iter(self)
    }

    fn add(&mut self, name: impl Into<String>, value: V) -> Added<V> {
        ResizableTable::add(self, name, value)
    }

    fn insert_last(&mut self, name: impl Into<String>, value: V) {
        ResizableTable::insert_last(self, name, value);
    }

    fn clear(&mut self) {
        ResizableTable::clear(self);
    }

    fn lookup<'a>(&'a self, name: &str) -> Option<&'a V> {
        ResizableTable::lookup(self, name)
    }
}

impl<V> Extend<(String, V)> for ResizableTable<V> {
    /// Adds every pair with [`add`](ResizableTable::add), so later pairs replace the values of
    /// earlier ones with the same name.
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for ResizableTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut table = ResizableTable::new();
        table.extend(iter);
        table
    }
}

impl<V> IntoIterator for ResizableTable<V> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a ResizableTable<V> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<V> Default for ResizableTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for ResizableTable<V> {
    fn clone(&self) -> Self {
        let mut table = ResizableTable::with_cap(self.cap);
        table.entries.extend(self.entries.iter().cloned());
        table
    }
}

/// Tables are equal when they hold the same entries in the same order. Capacity is ignored.
impl<V: PartialEq> PartialEq for ResizableTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for ResizableTable<V> {}

impl<V: Debug> Debug for ResizableTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizableTable")
            .field("entries", &self.entries)
            .field("len", &self.len())
            .field("cap", &self.cap)
            .finish()
    }
}

impl<V: TableValue> Display for ResizableTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== Table =======")?;
        writeln!(f, "currentElements={} maxElements={}", self.len(), self.cap)?;
        for (index, (name, value)) in self.iter().enumerate() {
            write!(f, "{index}: \"{name}\" ")?;
            value.fmt_listing(f)?;
            writeln!(f)?;
        }
        write!(f, "======== End Table =======")
    }
}
