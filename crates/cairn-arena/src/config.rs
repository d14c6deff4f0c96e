//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the chunked arena.
///
/// Controls the size of the head chunk, the minimum size of chunks created
/// on overflow, and an optional ceiling on chain length. Validated at
/// construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the head chunk in bytes.
    ///
    /// Default: [`DEFAULT_PAGE_SIZE`](Self::DEFAULT_PAGE_SIZE). Zero is
    /// allowed; every non-empty push then lands in a growth chunk.
    pub chunk_size: usize,

    /// Minimum size of a chunk created when no existing chunk can serve a
    /// push. The actual size is `max(requested, page_size)`.
    ///
    /// Default: [`DEFAULT_PAGE_SIZE`](Self::DEFAULT_PAGE_SIZE). Must be
    /// non-zero.
    pub page_size: usize,

    /// Maximum number of chunks in the chain, head included.
    ///
    /// `None` (the default) lets the chain grow until the system allocator
    /// refuses. `Some(0)` is rejected by [`validate`](Self::validate).
    pub max_chunks: Option<usize>,
}

impl ArenaConfig {
    /// Default chunk size in bytes.
    pub const DEFAULT_PAGE_SIZE: usize = 4095;

    /// Create a config whose head chunk is `chunk_size` bytes.
    ///
    /// Growth chunks use the default page size and the chain is unbounded.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            page_size: Self::DEFAULT_PAGE_SIZE,
            max_chunks: None,
        }
    }

    /// Set the minimum growth chunk size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Cap the number of chunks in the chain.
    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = Some(max_chunks);
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.page_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "page_size must be non-zero".into(),
            });
        }
        if self.max_chunks == Some(0) {
            return Err(ArenaError::InvalidConfig {
                reason: "max_chunks must allow at least the head chunk".into(),
            });
        }
        Ok(())
    }

    /// Size of the chunk created to serve a push of `requested` bytes.
    pub fn growth_chunk_size(&self, requested: usize) -> usize {
        requested.max(self.page_size)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
