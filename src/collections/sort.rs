//! Sorting shared by both collections.
//!
//! Neither collection sorts its entries in place with a comparator over whole entries. Instead, the
//! sort keys are gathered into a separate slice, a stable permutation of their original indices is
//! computed, and the entries are then re-projected through that permutation. Names and values stay
//! paired because they move together as entries (or nodes), and equal keys keep their original
//! relative order.

use std::cmp::Ordering;

use derive_more::{Display, IsVariant};

/// The direction of a sort.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SortOrder {
    #[default]
    #[display("ascending")]
    Ascending,
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Adjusts an ascending `ordering` to this direction.
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Returns the indices of `keys` in sorted order. The sort is stable, so equal keys appear in the
/// order they had originally, regardless of direction.
pub(crate) fn permutation<K: Ord>(keys: &[K], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by(|&a, &b| order.apply(keys[a].cmp(&keys[b])));
    indices
}

/// Reorders `items` so that position `i` holds the item previously at `permutation[i]`. The
/// allocation of `items` is reused.
pub(crate) fn apply_permutation<T>(items: &mut Vec<T>, permutation: &[usize]) {
    debug_assert_eq!(items.len(), permutation.len());

    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(permutation.iter().filter_map(|&index| slots[index].take()));
}
