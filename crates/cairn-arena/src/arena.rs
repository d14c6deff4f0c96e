//! The chunked bump arena.
//!
//! [`Arena`] owns a chain of [`Chunk`]s, head first. Pushes are served
//! first-fit from the head; when nothing fits, one new chunk is appended
//! after the tail.
//!
//! # Head-only rollback
//!
//! [`pop`](Arena::pop), [`clear`](Arena::clear),
//! [`position`](Arena::position) and [`set_pos_back`](Arena::set_pos_back)
//! act on the head chunk only. Allocations that landed in later chunks are
//! not rolled back by them. Use [`reset`](Arena::reset) to rewind every
//! chunk in the chain.

use crate::chunk::Chunk;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Allocation;
use crate::scratch::ArenaScope;

/// A chunked bump-pointer arena.
///
/// Allocations cannot be freed individually. Memory is reclaimed by
/// rewinding the head chunk, by resetting the whole chain, or by releasing
/// the arena.
///
/// # Thread Safety
///
/// `Arena` has no internal synchronisation. Every mutating operation takes
/// `&mut self`; use one arena per thread or wrap it in a lock.
#[derive(Debug)]
pub struct Arena {
    /// The chain. Index 0 is the head and is never removed.
    chunks: Vec<Chunk>,
    config: ArenaConfig,
}

impl Arena {
    /// Create an arena whose head chunk is one default page
    /// ([`ArenaConfig::DEFAULT_PAGE_SIZE`] bytes).
    pub fn new() -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena whose head chunk is exactly `size` bytes.
    pub fn with_size(size: usize) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::new(size))
    }

    /// Create an arena from an explicit configuration.
    ///
    /// Fails with [`ArenaError::InvalidConfig`] if the config does not
    /// validate, or [`ArenaError::AllocationFailed`] if the head chunk
    /// cannot be allocated.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let head = Chunk::new(config.chunk_size).inspect_err(|_| {
            tracing::warn!(size = config.chunk_size, "arena head chunk allocation failed");
        })?;
        let mut chunks = Vec::with_capacity(1);
        chunks.push(head);
        Ok(Self { chunks, config })
    }

    /// Bump-allocate `size` bytes.
    ///
    /// Scans the chain from the head and serves the request from the first
    /// chunk with at least `size` bytes remaining. If none has room, exactly
    /// one chunk of `max(size, page_size)` bytes is appended after the tail
    /// and the request is served from its start.
    ///
    /// The returned bytes are not zeroed on reuse: they are zero only if
    /// nothing has been written there since the chunk was created.
    ///
    /// On error the chain is left unchanged.
    pub fn push(&mut self, size: usize) -> Result<Allocation, ArenaError> {
        for (index, chunk) in self.chunks.iter_mut().enumerate() {
            if let Some(offset) = chunk.bump(size) {
                return Ok(Allocation::new(index, offset, size));
            }
        }

        if let Some(max_chunks) = self.config.max_chunks {
            if self.chunks.len() >= max_chunks {
                return Err(ArenaError::CapacityExceeded {
                    requested: size,
                    max_chunks,
                });
            }
        }

        let chunk_size = self.config.growth_chunk_size(size);
        let mut chunk = Chunk::new(chunk_size).inspect_err(|_| {
            tracing::warn!(requested = size, chunk_size, "arena growth chunk allocation failed");
        })?;
        let offset = chunk
            .bump(size)
            .ok_or(ArenaError::AllocationFailed { requested: size })?;
        self.chunks.push(chunk);
        let index = self.chunks.len() - 1;
        tracing::debug!(
            requested = size,
            chunk_size,
            chain_len = self.chunks.len(),
            "arena grew a new chunk"
        );
        Ok(Allocation::new(index, offset, size))
    }

    /// Push `data.len()` bytes and copy `data` into them.
    pub fn push_bytes(&mut self, data: &[u8]) -> Result<Allocation, ArenaError> {
        let alloc = self.push(data.len())?;
        self.bytes_mut(alloc)?.copy_from_slice(data);
        Ok(alloc)
    }

    /// Resolve a handle to its bytes.
    ///
    /// Fails with [`ArenaError::StaleAllocation`] if the handle names a
    /// chunk this arena does not have, or if a rollback has moved its
    /// chunk's cursor behind the end of the handle.
    pub fn bytes(&self, alloc: Allocation) -> Result<&[u8], ArenaError> {
        self.chunks
            .get(alloc.chunk)
            .and_then(|chunk| chunk.live(alloc.offset, alloc.len))
            .ok_or(ArenaError::StaleAllocation {
                chunk: alloc.chunk,
                offset: alloc.offset,
                len: alloc.len,
            })
    }

    /// Resolve a handle to its bytes, mutably.
    ///
    /// Same validity rules as [`bytes`](Self::bytes).
    pub fn bytes_mut(&mut self, alloc: Allocation) -> Result<&mut [u8], ArenaError> {
        self.chunks
            .get_mut(alloc.chunk)
            .and_then(|chunk| chunk.live_mut(alloc.offset, alloc.len))
            .ok_or(ArenaError::StaleAllocation {
                chunk: alloc.chunk,
                offset: alloc.offset,
                len: alloc.len,
            })
    }

    /// Give back the last `size` bytes bumped from the head chunk.
    ///
    /// Head-only: later chunks are untouched. Fails with
    /// [`ArenaError::InvalidRollback`] if `size` exceeds the head position.
    pub fn pop(&mut self, size: usize) -> Result<(), ArenaError> {
        let head = self.head();
        let position = head.used();
        if size > position {
            return Err(ArenaError::InvalidRollback {
                requested: size,
                position,
                chunk_size: head.size(),
            });
        }
        self.head_mut().set_current(position - size);
        tracing::trace!(size, position = position - size, "arena head popped");
        Ok(())
    }

    /// Rewind the head chunk to empty.
    ///
    /// Head-only: later chunks keep their allocations. See
    /// [`reset`](Self::reset) for a whole-chain rewind.
    pub fn clear(&mut self) {
        self.head_mut().set_current(0);
        tracing::trace!("arena head cleared");
    }

    /// Rewind every chunk in the chain to empty.
    ///
    /// Chunks are kept, so later pushes reuse them without allocating.
    pub fn reset(&mut self) {
        for chunk in &mut self.chunks {
            chunk.set_current(0);
        }
        tracing::trace!(chain_len = self.chunks.len(), "arena reset");
    }

    /// Current position of the head chunk, for use with
    /// [`set_pos_back`](Self::set_pos_back).
    pub fn position(&self) -> usize {
        self.head().used()
    }

    /// Move the head chunk's cursor to `position`.
    ///
    /// Every head allocation reaching past `position` becomes invalid.
    /// Fails with [`ArenaError::InvalidRollback`] if `position` is past the
    /// end of the head chunk.
    pub fn set_pos_back(&mut self, position: usize) -> Result<(), ArenaError> {
        let head = self.head();
        if position > head.size() {
            return Err(ArenaError::InvalidRollback {
                requested: position,
                position: head.used(),
                chunk_size: head.size(),
            });
        }
        self.head_mut().set_current(position);
        Ok(())
    }

    /// Open a scope that restores the current head position when dropped.
    pub fn scope(&mut self) -> ArenaScope<'_> {
        ArenaScope::new(self)
    }

    /// Free every chunk in the chain, head to tail.
    ///
    /// Returns the number of chunks freed. Dropping the arena does the same
    /// without the count.
    pub fn release(self) -> usize {
        let freed = self.chunks.len();
        let bytes = self.capacity_bytes();
        drop(self);
        tracing::debug!(chunks = freed, bytes, "arena released");
        freed
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The chain in order, head first.
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = &Chunk> + '_ {
        self.chunks.iter()
    }

    /// Bytes currently bumped across all chunks.
    pub fn used_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::used).sum()
    }

    /// Total size of all chunks in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::size).sum()
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn head(&self) -> &Chunk {
        &self.chunks[0]
    }

    fn head_mut(&mut self) -> &mut Chunk {
        &mut self.chunks[0]
    }
}
