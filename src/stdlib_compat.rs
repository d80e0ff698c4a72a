//! Standard library compatibility layer
//!
//! Conversions that let [`DAryHeap`] stand in for
//! `std::collections::BinaryHeap`. Where no branching factor is given, the
//! binary factor [`BINARY`](crate::dary::BINARY) is used, so these behave exactly like a
//! classical binary max-heap.
//!
//! # Example
//!
//! ```rust
//! use d_ary_heap::DAryHeap;
//!
//! let mut heap: DAryHeap<i32> = vec![5, 3, 7].into();
//! heap.extend([10, 1]);
//! assert_eq!(heap.branching_factor(), 2);
//! assert_eq!(heap.peek(), Some(&10));
//!
//! let sorted: Vec<i32> = heap.into_sorted_vec();
//! assert_eq!(sorted, vec![1, 3, 5, 7, 10]);
//! ```

use crate::dary::DAryHeap;

impl<K: Ord> From<Vec<K>> for DAryHeap<K> {
    /// Builds a binary heap from the vector in O(n)
    fn from(data: Vec<K>) -> Self {
        let mut heap = Self::default();
        heap.build(data);
        heap
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for DAryHeap<K> {
    fn from(arr: [K; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<K: Ord> From<DAryHeap<K>> for Vec<K> {
    /// Returns the keys in heap order
    fn from(heap: DAryHeap<K>) -> Self {
        heap.into_vec()
    }
}

impl<K: Ord> FromIterator<K> for DAryHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Ord> Extend<K> for DAryHeap<K> {
    /// Inserts every key, keeping the heap's own branching factor
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> IntoIterator for DAryHeap<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    /// Iterates the keys in heap order, like `BinaryHeap::into_iter`
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, K: Ord> IntoIterator for &'a DAryHeap<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
