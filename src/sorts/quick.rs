use super::{shuffle, InsertionSort, Sort, SORT_CUTOFF};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Quick sort with two-way partitioning around the first element.
///
/// Input is shuffled once up front so the quadratic worst case needs an
/// unlucky shuffle rather than an unlucky input. Not stable.
///
/// # Example
///
/// ```
/// use algs::sorts::{QuickSort, Sort};
///
/// let mut data = vec![3, 1, 2];
/// QuickSort::with_seed(12345).sort(&mut data[..]);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct QuickSort<R: RngCore = SmallRng> {
    rng: R,
}

impl QuickSort<SmallRng> {
    /// Shuffles with an entropy-seeded [`SmallRng`].
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic shuffling.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for QuickSort<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> QuickSort<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn quick_sort<T: Ord>(data: &mut [T]) {
        if data.len() <= SORT_CUTOFF + 1 {
            InsertionSort::sort_slice(data);
            return;
        }
        let p = Self::partition(data);
        let (left, right) = data.split_at_mut(p);
        Self::quick_sort(left);
        Self::quick_sort(&mut right[1..]);
    }

    /// Partitions around the pivot `data[0]` and returns its final index.
    /// Everything left of that index is `<=` the pivot, everything right `>=`.
    ///
    /// Requires `data.len() >= 2`.
    fn partition<T: Ord>(data: &mut [T]) -> usize {
        let hi = data.len() - 1;
        let mut i = 0;
        let mut j = data.len();
        loop {
            i += 1;
            while data[i] < data[0] && i < hi {
                i += 1;
            }
            j -= 1;
            while data[0] < data[j] {
                j -= 1;
            }
            if i >= j {
                break;
            }
            data.swap(i, j);
        }
        data.swap(0, j);
        j
    }
}

impl<T: Ord, R: RngCore> Sort<T> for QuickSort<R> {
    fn sort(&mut self, data: &mut [T]) {
        shuffle(data, &mut self.rng);
        Self::quick_sort(data);
    }
}
