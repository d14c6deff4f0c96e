//! Test utilities and fixtures for Cairn development.
//!
//! Helpers here work on plain ranges and bytes so that both the arena and
//! the list crates can use them from unit tests without a dependency cycle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ops::Range;

pub use fixtures::{CellRecord, GridProfile};

/// Deterministic, seed-dependent byte pattern of length `len`.
///
/// Neighbouring seeds produce different first bytes, so swapped or
/// overlapping allocations show up as mismatches.
pub fn pattern(seed: u8, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| seed.wrapping_mul(31).wrapping_add(i as u8).wrapping_add(1))
        .collect()
}

/// Whether two byte ranges in the same chunk share at least one byte.
///
/// Empty ranges never overlap anything.
pub fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
}

/// Panic if any two `(chunk, range)` spans overlap.
pub fn assert_disjoint<I>(spans: I)
where
    I: IntoIterator<Item = (usize, Range<usize>)>,
{
    let spans: Vec<(usize, Range<usize>)> = spans.into_iter().collect();
    for (i, (chunk_a, a)) in spans.iter().enumerate() {
        for (chunk_b, b) in &spans[i + 1..] {
            assert!(
                chunk_a != chunk_b || !ranges_overlap(a, b),
                "overlapping spans in chunk {chunk_a}: {a:?} and {b:?}"
            );
        }
    }
}
