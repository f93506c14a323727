//! Traits shared between collection types.

pub mod association;

#[doc(inline)]
pub use association::Association;
