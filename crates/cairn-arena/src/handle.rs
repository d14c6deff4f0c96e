//! Allocation handles.
//!
//! An [`Allocation`] records where a push landed: which chunk of the chain,
//! the byte offset inside it, and the length. It resolves to a byte slice in
//! O(1) through [`Arena::bytes`](crate::Arena::bytes).

use std::fmt;
use std::ops::Range;

/// Physical location of a push within the arena.
///
/// Handles are plain `Copy` values and do not borrow the arena. A handle is
/// valid until a rollback or reset moves its chunk's cursor behind
/// `offset + len`, or until the arena is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Allocation {
    pub(crate) chunk: usize,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Allocation {
    pub(crate) fn new(chunk: usize, offset: usize, len: usize) -> Self {
        Self { chunk, offset, len }
    }

    /// Index of the chunk in the chain (0 is the head).
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Byte offset from the start of the chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte range covered inside the owning chunk.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Allocation(chunk={}, off={}, len={})",
            self.chunk, self.offset, self.len
        )
    }
}
