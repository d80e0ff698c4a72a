//! D-ary max-heap
//!
//! A generalization of the binary heap in which every node has up to `d`
//! children. The tree is stored implicitly in a single `Vec`: the children of
//! position `i` live at `d * i + 1 ..= d * i + d` and the parent of `i > 0`
//! lives at `(i - 1) / d`. No node objects or pointers are involved.
//!
//! Larger branching factors make the tree shallower, which makes
//! [`insert`](DAryHeap::insert) and [`increase_key`](DAryHeap::increase_key)
//! cheaper, at the price of `d` comparisons per level when sifting down.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `build`        | O(n)               |
//! | `insert`       | O(log_d n)         |
//! | `increase_key` | O(log_d n)         |
//! | `extract_max`  | O(d · log_d n)     |
//! | `delete_at`    | O(d · log_d n)     |
//! | `peek`         | O(1)               |
//! | `heap_sort`    | O(n · d · log_d n) |
//!
//! # Example
//!
//! ```rust
//! use d_ary_heap::DAryHeap;
//!
//! let mut heap = DAryHeap::with_branching_factor(3).unwrap();
//! heap.build(vec![1, 2, 3, 4, 5]);
//! heap.increase_key(4, 10).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&10));
//! assert_eq!(heap.extract_max(), Ok(10));
//! assert_eq!(heap.extract_max(), Ok(5));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::HeapError;

/// Branching factor of a classical binary heap
pub const BINARY: usize = 2;

/// A max-heap in which every node has up to `d` children
///
/// The branching factor is fixed at construction and must be at least 2.
/// After every public operation returns, every key is greater than or equal
/// to each of its children.
#[derive(Debug, Clone)]
pub struct DAryHeap<K> {
    /// Keys in heap order; position encodes the tree shape
    data: Vec<K>,
    d: usize,
}

impl<K: Ord> DAryHeap<K> {
    /// Creates an empty heap with room for `initial_size` keys
    ///
    /// `initial_size` is only a capacity hint: the heap starts empty and its
    /// length is always the number of keys actually stored.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidConfiguration` if `branching_factor < 2`.
    pub fn new(initial_size: usize, branching_factor: usize) -> Result<Self, HeapError> {
        if branching_factor < BINARY {
            debug!("rejecting branching factor {}", branching_factor);
            return Err(HeapError::InvalidConfiguration { branching_factor });
        }
        Ok(Self {
            data: Vec::with_capacity(initial_size),
            d: branching_factor,
        })
    }

    /// Creates an empty heap with the given branching factor
    ///
    /// # Errors
    /// Returns `HeapError::InvalidConfiguration` if `branching_factor < 2`.
    pub fn with_branching_factor(branching_factor: usize) -> Result<Self, HeapError> {
        Self::new(0, branching_factor)
    }

    /// Creates a heap from arbitrary data, establishing the heap property
    ///
    /// # Errors
    /// Returns `HeapError::InvalidConfiguration` if `branching_factor < 2`.
    pub fn from_vec(data: Vec<K>, branching_factor: usize) -> Result<Self, HeapError> {
        let mut heap = Self::new(0, branching_factor)?;
        heap.build(data);
        Ok(heap)
    }

    /// Returns the branching factor `d`
    pub fn branching_factor(&self) -> usize {
        self.d
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the position of the `k`-th child (1-based) of `parent_index`
    ///
    /// Pure arithmetic: the result is not checked against the heap length.
    pub fn k_child(&self, k: usize, parent_index: usize) -> usize {
        debug_assert!((1..=self.d).contains(&k), "child {} outside 1..={}", k, self.d);
        self.d * parent_index + k
    }

    /// Returns the position of the parent of `child_index`
    ///
    /// The root has no parent; `parent(0)` returns 0.
    pub fn parent(&self, child_index: usize) -> usize {
        parent_of(child_index, self.d)
    }

    /// Replaces the contents of the heap with `data` and restores the heap property
    ///
    /// Runs in O(n): internal nodes are sifted down from the last one to the
    /// root, so each node is fixed only after all subtrees below it are valid.
    pub fn build(&mut self, data: Vec<K>) {
        trace!("building {}-ary heap from {} keys", self.d, data.len());
        self.data = data;
        heapify(&mut self.data, self.d);
    }

    /// Restores the heap property below `node`
    ///
    /// Assumes the subtrees of `node`'s children are already valid heaps. At
    /// each level the largest of `node` and its children moves up; among equal
    /// children the lowest position wins. Positions outside the heap are ignored.
    pub fn sift_down(&mut self, node: usize) {
        sift_down(&mut self.data, self.d, node);
    }

    /// Raises the key at `index` to `new_key` and moves it towards the root
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfRange` if `index >= len()`
    /// - `HeapError::InvalidKeyUpdate` if `new_key` is not strictly greater
    ///   than the current key
    pub fn increase_key(&mut self, index: usize, new_key: K) -> Result<(), HeapError> {
        let len = self.data.len();
        let current = self.data.get(index).ok_or_else(|| {
            debug!("increase_key: index {} out of range (len {})", index, len);
            HeapError::IndexOutOfRange { index, len }
        })?;
        if new_key <= *current {
            debug!("increase_key: key at {} not increased", index);
            return Err(HeapError::InvalidKeyUpdate);
        }

        self.data[index] = new_key;
        sift_up(&mut self.data, self.d, index);
        Ok(())
    }

    /// Inserts a key
    pub fn insert(&mut self, key: K) {
        self.data.push(key);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, self.d, last);
    }

    /// Removes and returns the key at `position`
    ///
    /// The last key takes the freed slot. It may be larger than its new
    /// ancestors or smaller than its new descendants, so it is sifted up and
    /// then down.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` if `position >= len()`.
    pub fn delete_at(&mut self, position: usize) -> Result<K, HeapError> {
        let len = self.data.len();
        if position >= len {
            debug!("delete_at: index {} out of range (len {})", position, len);
            return Err(HeapError::IndexOutOfRange { index: position, len });
        }

        let removed = self.data.swap_remove(position);
        if position < self.data.len() {
            let settled = sift_up(&mut self.data, self.d, position);
            sift_down(&mut self.data, self.d, settled);
        }
        Ok(removed)
    }

    /// Removes and returns the maximum key
    ///
    /// # Errors
    /// Returns `HeapError::HeapUnderflow` if the heap is empty.
    pub fn extract_max(&mut self) -> Result<K, HeapError> {
        if self.data.is_empty() {
            debug!("extract_max on empty heap");
            return Err(HeapError::HeapUnderflow);
        }

        let max = self.data.swap_remove(0);
        sift_down(&mut self.data, self.d, 0);
        Ok(max)
    }

    /// Returns the maximum key without removing it
    pub fn peek(&self) -> Option<&K> {
        self.data.first()
    }

    /// Sorts `sequence` in ascending order using this heap's branching factor
    ///
    /// The slice is heapified in place, then the maximum is repeatedly swapped
    /// to the end of a shrinking prefix. The keys stored in `self` are not
    /// touched.
    pub fn heap_sort(&self, sequence: &mut [K]) {
        trace!("heap sorting {} keys with d = {}", sequence.len(), self.d);
        sort_in_place(sequence, self.d);
    }

    /// Consumes the heap and returns its keys in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        trace!("draining {}-ary heap of {} keys", self.d, self.data.len());
        // Already a heap, so only the extraction phase is needed.
        for end in (1..self.data.len()).rev() {
            self.data.swap(0, end);
            sift_down(&mut self.data[..end], self.d, 0);
        }
        self.data
    }

    /// Returns true if every key is at least as large as each of its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[parent_of(i, self.d)] >= self.data[i])
    }

    /// Removes all keys, keeping the branching factor
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the keys in heap order
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Consumes the heap and returns the keys in heap order
    pub fn into_vec(self) -> Vec<K> {
        self.data
    }
}

impl<K: Ord> Default for DAryHeap<K> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            d: BINARY,
        }
    }
}

/// Diagnostic rendering of the backing sequence, e.g. `[9, 4, 7]`
impl<K: fmt::Display> fmt::Display for DAryHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}

fn parent_of(child_index: usize, d: usize) -> usize {
    child_index.saturating_sub(1) / d
}

/// Establishes the heap property over the whole slice
fn heapify<K: Ord>(data: &mut [K], d: usize) {
    if data.len() < 2 {
        return;
    }
    let last_internal = parent_of(data.len() - 1, d);
    for node in (0..=last_internal).rev() {
        sift_down(data, d, node);
    }
}

fn sort_in_place<K: Ord>(data: &mut [K], d: usize) {
    heapify(data, d);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], d, 0);
    }
}

/// Sifts `node` down within `data`; the slice length bounds the heap
fn sift_down<K: Ord>(data: &mut [K], d: usize, mut node: usize) {
    let len = data.len();
    loop {
        let first = match node.checked_mul(d).and_then(|i| i.checked_add(1)) {
            Some(first) if first < len => first,
            _ => return,
        };
        let end = first.saturating_add(d).min(len);

        let mut largest = node;
        for child in first..end {
            if data[child] > data[largest] {
                largest = child;
            }
        }

        if largest == node {
            return;
        }
        data.swap(node, largest);
        node = largest;
    }
}

/// Sifts `index` up within `data`, returning where the key came to rest
fn sift_up<K: Ord>(data: &mut [K], d: usize, mut index: usize) -> usize {
    while index > 0 {
        let parent = parent_of(index, d);
        if data[index] > data[parent] {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
    index
}
