use super::Sort;

/// Insertion sort. Stable, O(n²) comparisons, fast on short or nearly sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl InsertionSort {
    pub(crate) fn sort_slice<T: Ord>(data: &mut [T]) {
        for i in 1..data.len() {
            // let data[i] sink past every greater predecessor
            let mut j = i;
            while j > 0 && data[j] < data[j - 1] {
                data.swap(j, j - 1);
                j -= 1;
            }
        }
    }
}

impl<T: Ord> Sort<T> for InsertionSort {
    fn sort(&mut self, data: &mut [T]) {
        Self::sort_slice(data);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::cmp::Ordering;

    /// Orders by `key` alone so stability is observable through `tag`.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Tagged {
        pub(crate) key: u8,
        pub(crate) tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    pub(crate) fn tagged(pairs: &[(u8, char)]) -> Vec<Tagged> {
        pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut data = tagged(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
        InsertionSort.sort(&mut data[..]);
        let tags: String = data.iter().map(|t| t.tag).collect();
        assert_eq!(tags, "ebdac");
    }

    #[test]
    fn sorts_strings() {
        let mut words = vec!["pear", "apple", "fig"];
        InsertionSort.sort(&mut words[..]);
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }
}
