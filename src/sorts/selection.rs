use super::Sort;

/// Selection sort. Always n²/2 comparisons and at most n swaps; not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl<T: Ord> Sort<T> for SelectionSort {
    fn sort(&mut self, data: &mut [T]) {
        // data[..i] is sorted and holds the i smallest values
        for i in 0..data.len() {
            let mut min = i;
            for j in (i + 1)..data.len() {
                if data[j] < data[min] {
                    min = j;
                }
            }
            data.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs() {
        let mut one = [3];
        SelectionSort.sort(&mut one[..]);
        assert_eq!(one, [3]);

        let mut data = [5, -1, 3, 3, 0];
        SelectionSort.sort(&mut data[..]);
        assert_eq!(data, [-1, 0, 3, 3, 5]);
    }
}
