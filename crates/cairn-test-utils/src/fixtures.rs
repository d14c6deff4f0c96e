//! Allocation profiles shaped like the grid renderer that drives the arena.
//!
//! The renderer makes one large allocation for its global state and then one
//! small rectangle record per cell. [`GridProfile`] captures those sizes;
//! [`CellRecord`] is the 16-byte rectangle it writes into each record.

/// Sizes of a grid renderer's allocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridProfile {
    pub rows: usize,
    pub cols: usize,
    /// Pixel size of one square cell.
    pub cell_px: i32,
    /// Bytes of the one-off global state allocation.
    pub state_size: usize,
}

impl GridProfile {
    /// 100 × 100 cells of 10 px: two window pointers, one record pointer
    /// and one state byte per cell.
    pub fn reference() -> Self {
        Self::new(100, 100, 10)
    }

    pub fn new(rows: usize, cols: usize, cell_px: i32) -> Self {
        let cells = rows * cols;
        Self {
            rows,
            cols,
            cell_px,
            state_size: 2 * 8 + cells * 8 + cells,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Rectangle covering the cell at (`row`, `col`).
    pub fn record(&self, row: usize, col: usize) -> CellRecord {
        CellRecord {
            x: col as i32 * self.cell_px,
            y: row as i32 * self.cell_px,
            w: self.cell_px,
            h: self.cell_px,
        }
    }

    /// Chain length after pushing the state and every record into an arena
    /// whose head chunk and growth pages are both `page` bytes.
    ///
    /// The state never fits a page, so it gets a dedicated chunk; records
    /// then fill the head and as many fresh pages as they need.
    pub fn expected_chunks(&self, page: usize) -> usize {
        let per_page = page / CellRecord::SIZE;
        let in_head = per_page.min(self.cell_count());
        let overflow = self.cell_count() - in_head;
        1 + usize::from(self.state_size > page) + overflow.div_ceil(per_page)
    }
}

/// A drawing rectangle, little-endian `x, y, w, h` as `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl CellRecord {
    pub const SIZE: usize = 16;

    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (dst, v) in out.chunks_exact_mut(4).zip([self.x, self.y, self.w, self.h]) {
            dst.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Decode from exactly [`SIZE`](Self::SIZE) bytes; `None` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        let field = |i: usize| {
            let mut word = [0u8; 4];
            word.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
            i32::from_le_bytes(word)
        };
        Some(Self {
            x: field(0),
            y: field(1),
            w: field(2),
            h: field(3),
        })
    }
}
