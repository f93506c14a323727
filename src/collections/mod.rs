//! Ordered name/value collections.
//!
//! # Purpose
//! The two collections here implement the same contract with different storage, which makes the
//! trade-offs between them easy to compare: [`ResizableTable`](contiguous::ResizableTable) pays
//! for compaction on removal, [`LinkedTable`](linked::LinkedTable) pays for every positional
//! access instead.
//!
//! # Method
//! Shared pieces live beside the collections rather than inside them: the value contract in
//! [`value`], sorting in [`sort`] and the common operations in [`traits`].

#[cfg(feature = "contiguous")]
pub mod contiguous;
pub mod entry;
#[cfg(feature = "linked")]
pub mod linked;
pub mod sort;
pub mod traits;
pub mod value;

#[doc(inline)]
pub use entry::{Added, Entry};
#[doc(inline)]
pub use sort::SortOrder;
#[doc(inline)]
pub use value::{TableValue, ValueKind};
