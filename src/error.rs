//! Error type for d-ary heap operations

use std::fmt;

/// Error type for heap operations
///
/// Every fallible operation on [`DAryHeap`](crate::DAryHeap) checks its
/// arguments before touching the heap, so a returned error means the heap
/// is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The branching factor is below 2
    InvalidConfiguration {
        /// The rejected branching factor
        branching_factor: usize,
    },
    /// The new key is not strictly greater than the current key
    InvalidKeyUpdate,
    /// A position lies outside `[0, len)`
    IndexOutOfRange {
        /// The rejected position
        index: usize,
        /// Number of keys in the heap at the time of the call
        len: usize,
    },
    /// Extraction from an empty heap
    HeapUnderflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidConfiguration { branching_factor } => {
                write!(
                    f,
                    "invalid branching factor {}, must be at least 2",
                    branching_factor
                )
            }
            HeapError::InvalidKeyUpdate => {
                write!(f, "new key is not greater than the current key")
            }
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of heap range (len {})", index, len)
            }
            HeapError::HeapUnderflow => {
                write!(f, "cannot extract from an empty heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}
