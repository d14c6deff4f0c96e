//! List error types.

use std::error::Error;
use std::fmt;

/// Errors from [`List`](crate::List) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The backing block could not be allocated or grown.
    AllocationFailed {
        /// Number of element slots that were requested.
        requested_slots: usize,
    },
    /// `pop` on a list with no elements.
    EmptyCollection,
    /// `get` with an index at or past the length.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        length: usize,
    },
    /// `append` on a list that was never initialised.
    Uninitialized,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_slots } => {
                write!(f, "list allocation failed: requested {requested_slots} slots")
            }
            Self::EmptyCollection => write!(f, "pop from an empty list"),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for list of length {length}")
            }
            Self::Uninitialized => write!(f, "list used before initialisation"),
        }
    }
}

impl Error for ListError {}
