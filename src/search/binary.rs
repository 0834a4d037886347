use core::cmp::Ordering;

/// Binary search for `target` in the ascending slice `data`.
///
/// Returns `Ok(index)` of a matching element, or `Err(index)` where `target`
/// would have to be inserted to keep `data` sorted. Unsorted input gives an
/// unspecified answer. Iterative, O(lg n) comparisons.
pub fn find<T: Ord>(target: &T, data: &[T]) -> Result<usize, usize> {
    // candidates live in data[low..high]
    let mut low = 0;
    let mut high = data.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match target.cmp(&data[mid]) {
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(low)
}
