//! Chunked bump-pointer arena allocation.
//!
//! Provides an [`Arena`] that carves byte allocations sequentially out of a
//! chain of zero-filled chunks. Individual allocations are never freed;
//! memory comes back through rollback of the head chunk, a whole-chain
//! reset, or release of the arena.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── ArenaConfig (head chunk size, growth page size, chain limit)
//! └── Vec<Chunk> (head first; first-fit search; grows at the tail)
//!     └── Chunk (Box<[u8]> + bump cursor)
//! ```
//!
//! Pushes return an [`Allocation`] handle (chunk, offset, len) that resolves
//! to bytes through [`Arena::bytes`] and [`Arena::bytes_mut`].
//!
//! # Rollback scope
//!
//! `pop`, `clear`, `position` and `set_pos_back` touch the head chunk only.
//! [`Arena::reset`] rewinds every chunk.
//!
//! # Safety
//!
//! No `unsafe`. Chunk regions are `Box<[u8]>` allocated with
//! `try_reserve_exact`, so out-of-memory surfaces as
//! [`ArenaError::AllocationFailed`] rather than an abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod chunk;
pub mod config;
pub mod error;
pub mod handle;
pub mod scratch;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use chunk::Chunk;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Allocation;
pub use scratch::ArenaScope;
