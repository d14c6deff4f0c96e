//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing region for a chunk could not be allocated.
    AllocationFailed {
        /// Size of the chunk region that was requested, in bytes.
        requested: usize,
    },
    /// A rollback would move the head cursor below zero or past the end
    /// of the head chunk.
    InvalidRollback {
        /// The pop size or target position that was rejected.
        requested: usize,
        /// Head cursor at the time of the call.
        position: usize,
        /// Size of the head chunk in bytes.
        chunk_size: usize,
    },
    /// Growing the chain would exceed the configured chunk limit.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// The configured maximum chain length.
        max_chunks: usize,
    },
    /// An [`Allocation`](crate::Allocation) that no longer lies inside the
    /// live region of its chunk, or that names a chunk the arena does not own.
    StaleAllocation {
        /// Chunk index recorded in the handle.
        chunk: usize,
        /// Byte offset recorded in the handle.
        offset: usize,
        /// Length recorded in the handle.
        len: usize,
    },
    /// An [`ArenaConfig`](crate::ArenaConfig) failed validation.
    InvalidConfig {
        /// Which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "arena chunk allocation failed: requested {requested} bytes")
            }
            Self::InvalidRollback {
                requested,
                position,
                chunk_size,
            } => {
                write!(
                    f,
                    "invalid rollback: requested {requested}, head position {position}, head chunk {chunk_size} bytes"
                )
            }
            Self::CapacityExceeded {
                requested,
                max_chunks,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes with all {max_chunks} chunks in use"
                )
            }
            Self::StaleAllocation { chunk, offset, len } => {
                write!(
                    f,
                    "stale allocation: chunk {chunk}, offset {offset}, len {len}"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
