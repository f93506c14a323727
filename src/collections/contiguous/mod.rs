//! Contiguous collection types. Currently this is just [`ResizableTable`], an array-backed
//! association table.

pub mod table;

#[doc(inline)]
pub use table::ResizableTable;
