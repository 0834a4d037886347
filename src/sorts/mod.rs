//! Comparison sorts over mutable slices.
//!
//! To sort only part of a slice, sort a sub-slice: `s.sort(&mut data[low..=high])`.

mod insertion;
mod merge;
mod quick;
mod selection;

pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use rand::Rng;

/// Segments no longer than `SORT_CUTOFF + 1` are finished with insertion sort
/// by the recursive sorts.
pub(crate) const SORT_CUTOFF: usize = 11;

/// An in-place sorting algorithm for values of type `T`.
pub trait Sort<T: Ord> {
    /// Sort `data` into ascending order.
    fn sort(&mut self, data: &mut [T]);
}

/// `true` if no element is less than its predecessor.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    for i in (1..data.len()).rev() {
        let j = rng.gen_range(0..=i);
        data.swap(i, j);
    }
}
