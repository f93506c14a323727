use derive_more::{Display, Error};

/// The provided index doesn't refer to a live entry. Bounds are always checked against the number
/// of entries, never against the allocated capacity.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} entries")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An operation on the first or last entry was attempted on an empty collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection has no entries")]
pub struct NoElements;

/// Names are required to be non-empty.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("entry names must not be empty")]
pub struct EmptyName;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
