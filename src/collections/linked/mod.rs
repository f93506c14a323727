//! Linked collection types. Currently this is just [`LinkedTable`], the doubly linked counterpart
//! to [`ResizableTable`](crate::collections::contiguous::ResizableTable).

pub mod list;

#[doc(inline)]
pub use list::LinkedTable;
