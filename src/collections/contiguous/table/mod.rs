//! A module containing [`ResizableTable`] and associated types.
//!
//! The other included types are for iteration: [`Iter`] for borrowed `(name, value)` pairs,
//! [`ValuesMut`] for mutable access to values (names can't be changed in place, as that could
//! break their uniqueness) and [`IntoIter`] for owned iteration.

mod iter;
mod table;

pub use iter::*;
pub use table::*;
