//! Benchmark profiles and utilities for Cairn.
//!
//! Provides pre-built allocation profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cell records) plus one state block
//! - [`stress_profile`]: 316x316 grid (~100K cell records)
//! - [`populate_grid`]: replays a profile's pushes into an arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cairn_arena::{Allocation, Arena, ArenaError};
use cairn_list::{List, ListError};
use cairn_test_utils::GridProfile;

/// Reference profile: 100x100 cells of 10 px.
pub fn reference_profile() -> GridProfile {
    GridProfile::reference()
}

/// Stress profile: 316x316 cells (~100K records), 10x the reference.
pub fn stress_profile() -> GridProfile {
    GridProfile::new(316, 316, 3)
}

/// Handles produced by [`populate_grid`].
pub struct GridAllocations {
    /// The one-off global state block.
    pub state: Allocation,
    /// One record per cell, row-major.
    pub records: Vec<Allocation>,
}

/// Push the state block, then one encoded record per cell, row-major.
pub fn populate_grid(arena: &mut Arena, profile: &GridProfile) -> Result<GridAllocations, ArenaError> {
    let state = arena.push(profile.state_size)?;
    let mut records = Vec::with_capacity(profile.cell_count());
    for row in 0..profile.rows {
        for col in 0..profile.cols {
            let bytes = profile.record(row, col).to_bytes();
            records.push(arena.push_bytes(&bytes)?);
        }
    }
    Ok(GridAllocations { state, records })
}

/// A list holding `0..n`.
pub fn filled_list(n: u64) -> Result<List<u64>, ListError> {
    let mut list = List::new()?;
    for i in 0..n {
        list.append(i)?;
    }
    Ok(list)
}
