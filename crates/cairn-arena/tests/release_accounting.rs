//! Release accounting: every chunk region in the chain is allocated once
//! and freed once.
//!
//! A counting global allocator watches byte regions of a few distinctive
//! sizes. This file holds a single test so nothing else in the binary
//! allocates those sizes while the counters are armed.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use cairn_arena::{Arena, ArenaConfig};

const HEAD: usize = 3001;
const PAGE: usize = 3011;
const BIG: usize = 5003;

static ARMED: AtomicBool = AtomicBool::new(false);
static REGION_ALLOCS: AtomicUsize = AtomicUsize::new(0);
static REGION_FREES: AtomicUsize = AtomicUsize::new(0);

struct CountingAlloc;

fn tracked(layout: Layout) -> bool {
    layout.align() == 1 && matches!(layout.size(), HEAD | PAGE | BIG)
}

#[allow(unsafe_code)]
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if ARMED.load(Ordering::SeqCst) && tracked(layout) {
            REGION_ALLOCS.fetch_add(1, Ordering::SeqCst);
        }
        // SAFETY: forwarded unchanged to the system allocator.
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if ARMED.load(Ordering::SeqCst) && tracked(layout) {
            REGION_FREES.fetch_add(1, Ordering::SeqCst);
        }
        // SAFETY: `ptr` came from `alloc` above with the same layout.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

#[test]
fn release_frees_every_chunk_region_once() {
    ARMED.store(true, Ordering::SeqCst);

    let config = ArenaConfig::new(HEAD).with_page_size(PAGE);
    let mut arena = Arena::with_config(config).unwrap();
    arena.push(HEAD).unwrap(); // fills the head
    arena.push(PAGE).unwrap(); // one page-sized chunk
    arena.push(BIG).unwrap(); // one oversized chunk
    assert_eq!(arena.chunk_count(), 3);
    assert_eq!(REGION_ALLOCS.load(Ordering::SeqCst), 3);
    assert_eq!(REGION_FREES.load(Ordering::SeqCst), 0);

    let freed = arena.release();

    ARMED.store(false, Ordering::SeqCst);
    assert_eq!(freed, 3);
    assert_eq!(REGION_FREES.load(Ordering::SeqCst), 3);
}
