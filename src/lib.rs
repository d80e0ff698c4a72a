//! D-ary Heap for Rust
//!
//! This crate provides a d-ary max-heap: a generalization of the binary heap
//! where every node has up to `d` children, with `d >= 2` chosen at
//! construction time.
//!
//! # Features
//!
//! - **Configurable branching factor**: trade shallower trees (cheaper
//!   `insert`/`increase_key`) against more comparisons per level
//! - **Implicit layout**: keys live in one contiguous `Vec`; parent and child
//!   positions are computed, never stored
//! - **Positional updates**: `increase_key` and `delete_at` work on any position
//! - **In-place heap sort** over any slice of `Ord` keys
//! - **`BinaryHeap`-style conversions** (`From<Vec<K>>`, `FromIterator`, `Extend`)
//!
//! # Example
//!
//! ```rust
//! use d_ary_heap::{DAryHeap, HeapError};
//!
//! let mut heap = DAryHeap::new(8, 4).unwrap();
//! for key in [4, 1, 7, 3, 9, 2] {
//!     heap.insert(key);
//! }
//!
//! assert_eq!(heap.extract_max(), Ok(9));
//! assert_eq!(heap.extract_max(), Ok(7));
//! assert_eq!(heap.delete_at(0), Ok(4));
//!
//! let mut values = [5, 3, 8, 1];
//! heap.heap_sort(&mut values);
//! assert_eq!(values, [1, 3, 5, 8]);
//!
//! assert_eq!(
//!     DAryHeap::<i32>::with_branching_factor(1).unwrap_err(),
//!     HeapError::InvalidConfiguration { branching_factor: 1 }
//! );
//! ```

pub mod dary;
pub mod error;
pub mod stdlib_compat;

pub use dary::DAryHeap;
pub use error::HeapError;
