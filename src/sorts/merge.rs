use super::{InsertionSort, Sort, SORT_CUTOFF};

/// Top-down merge sort.
///
/// Stable, O(n lg n) comparisons in every case, O(n) extra space for one
/// auxiliary buffer shared by all merges. Short segments go to insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl MergeSort {
    fn sort_segment<T: Ord + Clone>(data: &mut [T], aux: &mut [T]) {
        if data.len() <= SORT_CUTOFF + 1 {
            InsertionSort::sort_slice(data);
            return;
        }
        let mid = (data.len() - 1) / 2 + 1;
        {
            let (left, right) = data.split_at_mut(mid);
            let (aux_left, aux_right) = aux.split_at_mut(mid);
            Self::sort_segment(left, aux_left);
            Self::sort_segment(right, aux_right);
        }
        Self::merge(data, aux, mid);
    }

    /// Merge the sorted runs `data[..mid]` and `data[mid..]` back into `data`.
    fn merge<T: Ord + Clone>(data: &mut [T], aux: &mut [T], mid: usize) {
        aux.clone_from_slice(data);

        let (mut i, mut j) = (0, mid);
        for slot in data.iter_mut() {
            // ties take from the left run
            if i < mid && (j >= aux.len() || aux[j] >= aux[i]) {
                slot.clone_from(&aux[i]);
                i += 1;
            } else {
                slot.clone_from(&aux[j]);
                j += 1;
            }
        }
    }
}

impl<T: Ord + Clone> Sort<T> for MergeSort {
    fn sort(&mut self, data: &mut [T]) {
        if data.len() < 2 {
            return;
        }
        let mut aux = data.to_vec();
        Self::sort_segment(data, &mut aux);
    }
}
