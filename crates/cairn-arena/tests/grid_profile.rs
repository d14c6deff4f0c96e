//! End-to-end allocation pattern of the grid renderer: one state block,
//! one record per cell, one release at shutdown.

use cairn_arena::{Allocation, Arena, ArenaConfig};
use cairn_test_utils::{assert_disjoint, CellRecord, GridProfile};

fn populate(arena: &mut Arena, profile: &GridProfile) -> (Allocation, Vec<Allocation>) {
    let state = arena.push(profile.state_size).unwrap();
    let mut records = Vec::with_capacity(profile.cell_count());
    for row in 0..profile.rows {
        for col in 0..profile.cols {
            let rec = profile.record(row, col);
            records.push(arena.push_bytes(&rec.to_bytes()).unwrap());
        }
    }
    (state, records)
}

#[test]
fn reference_grid_chain_shape() {
    let profile = GridProfile::reference();
    let mut arena = Arena::new().unwrap();
    let (state, records) = populate(&mut arena, &profile);

    assert_eq!(state.chunk(), 1);
    assert_eq!(state.offset(), 0);
    assert_eq!(
        arena.chunk_count(),
        profile.expected_chunks(ArenaConfig::DEFAULT_PAGE_SIZE)
    );
    assert_eq!(
        arena.used_bytes(),
        profile.state_size + profile.cell_count() * CellRecord::SIZE
    );

    // The first records fill the head before any page is added.
    assert_eq!(records[0].chunk(), 0);
    assert_eq!(records[254].chunk(), 0);
    assert_eq!(records[255].chunk(), 2);
}

#[test]
fn records_read_back_in_cell_order() {
    let profile = GridProfile::new(20, 30, 8);
    let mut arena = Arena::new().unwrap();
    let (state, records) = populate(&mut arena, &profile);

    assert!(arena.bytes(state).unwrap().iter().all(|&b| b == 0));
    for (i, alloc) in records.iter().enumerate() {
        let (row, col) = (i / profile.cols, i % profile.cols);
        let rec = CellRecord::from_bytes(arena.bytes(*alloc).unwrap()).unwrap();
        assert_eq!(rec, profile.record(row, col));
    }
}

#[test]
fn records_never_overlap() {
    let profile = GridProfile::new(40, 40, 4);
    let mut arena = Arena::with_config(ArenaConfig::new(1024).with_page_size(512)).unwrap();
    let (state, records) = populate(&mut arena, &profile);
    let spans = std::iter::once(state)
        .chain(records)
        .map(|a| (a.chunk(), a.range()));
    assert_disjoint(spans);
}

#[test]
fn shutdown_releases_whole_chain() {
    let profile = GridProfile::reference();
    let mut arena = Arena::new().unwrap();
    let _ = populate(&mut arena, &profile);
    let chunks = arena.chunk_count();
    assert_eq!(arena.release(), chunks);
}
