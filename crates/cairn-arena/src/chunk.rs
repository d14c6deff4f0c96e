//! Contiguous byte chunks with bump allocation.
//!
//! A [`Chunk`] is one zero-filled `Box<[u8]>` with a cursor. The arena owns
//! a chain of them; see [`Arena`](crate::Arena).

use crate::error::ArenaError;

/// A single contiguous memory chunk with bump allocation.
///
/// The region is zero-filled once, at creation. Bytes are never re-zeroed
/// afterwards: a rollback followed by a new bump hands back whatever was
/// last written there.
pub struct Chunk {
    /// Backing storage, allocated to full size at creation.
    region: Box<[u8]>,
    /// Bump pointer: offset of the next free byte.
    current: usize,
}

impl Chunk {
    /// Allocate a zero-filled chunk of exactly `size` bytes.
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the system allocator
    /// refuses the request instead of aborting the process.
    pub(crate) fn new(size: usize) -> Result<Self, ArenaError> {
        let mut region = Vec::new();
        region
            .try_reserve_exact(size)
            .map_err(|_| ArenaError::AllocationFailed { requested: size })?;
        region.resize(size, 0u8);
        Ok(Self {
            region: region.into_boxed_slice(),
            current: 0,
        })
    }

    /// Bump `len` bytes from this chunk.
    ///
    /// Returns the starting offset, or `None` if the remaining space is
    /// smaller than `len`.
    pub(crate) fn bump(&mut self, len: usize) -> Option<usize> {
        if self.remaining() < len {
            return None;
        }
        let offset = self.current;
        self.current += len;
        Some(offset)
    }

    /// Move the cursor to `position`.
    ///
    /// Callers check `position <= size()`.
    pub(crate) fn set_current(&mut self, position: usize) {
        debug_assert!(position <= self.region.len());
        self.current = position;
    }

    /// Shared view of `len` bytes at `offset`, or `None` if it reaches past the cursor.
    pub(crate) fn live(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        if end > self.current {
            return None;
        }
        Some(&self.region[offset..end])
    }

    /// Mutable view of `len` bytes at `offset`, or `None` if it reaches past the cursor.
    pub(crate) fn live_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(len)?;
        if end > self.current {
            return None;
        }
        Some(&mut self.region[offset..end])
    }

    /// Total size of the chunk in bytes.
    pub fn size(&self) -> usize {
        self.region.len()
    }

    /// Offset of the next free byte.
    pub fn used(&self) -> usize {
        self.current
    }

    /// Bytes still available for bumping.
    pub fn remaining(&self) -> usize {
        self.region.len() - self.current
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("size", &self.size())
            .field("current", &self.current)
            .finish()
    }
}
