mod iter;
mod linked_table;
mod node;
mod tests;

pub use iter::*;
pub use linked_table::*;
pub(crate) use node::*;
