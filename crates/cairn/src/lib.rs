//! Cairn: a chunked bump arena and a growable list.
//!
//! This is the top-level facade crate that re-exports the public API from
//! both Cairn sub-crates. For most users, adding `cairn` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! // One large block for driver state, then small per-cell records.
//! let mut arena = Arena::new()?;
//! let state = arena.push(90_016)?;
//! let mut cells = Vec::new();
//! for i in 0..100i32 {
//!     let mut rect = [0u8; 16];
//!     rect[..4].copy_from_slice(&(i * 10).to_le_bytes());
//!     cells.push(arena.push_bytes(&rect)?);
//! }
//! assert_eq!(state.chunk(), 1);
//! assert_eq!(arena.bytes(cells[3])?[0], 30);
//!
//! // Temporary work that is rolled back when the scope ends.
//! let before = arena.position();
//! {
//!     let mut scratch = arena.scope();
//!     scratch.push(512)?;
//! }
//! assert_eq!(arena.position(), before);
//! arena.release();
//!
//! let mut list = List::new()?;
//! for v in [1, 2, 3] {
//!     list.append(v)?;
//! }
//! assert_eq!(list.pop()?, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `cairn-arena` | `Arena`, `Chunk`, `Allocation`, `ArenaConfig`, `ArenaScope` |
//! | [`list`] | `cairn-list` | `List`, `Header`, growth constants |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Chunked bump-pointer arena (`cairn-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::Allocation`]; both
/// are also in the [`prelude`].
pub use cairn_arena as arena;

/// Growable list with explicit initialisation (`cairn-list`).
pub use cairn_list as list;

/// Common imports for typical Cairn usage.
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use cairn_arena::{Allocation, Arena, ArenaConfig, ArenaError, ArenaScope};

    // List
    pub use cairn_list::{List, ListError};
}
