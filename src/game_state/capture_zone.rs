//! Append-only record of captured pieces.
//!
//! Each team owns two display rows of eight slots, written by a cursor
//! that advances monotonically and wraps from slot 7 into the next row.
//! Sixteen slots outlast the fifteen capturable pieces.

use crate::board::piece_value::PieceValue;

pub const CAPTURE_ROWS: usize = 2;
pub const CAPTURE_SLOTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureZone {
    slots: [[PieceValue; CAPTURE_SLOTS]; CAPTURE_ROWS],
    row: u8,
    slot: u8,
}

impl CaptureZone {
    pub const fn empty() -> Self {
        CaptureZone {
            slots: [[PieceValue::EMPTY; CAPTURE_SLOTS]; CAPTURE_ROWS],
            row: 0,
            slot: 0,
        }
    }

    /// Appends a captured cell at the cursor and advances it.
    pub fn push(&mut self, value: PieceValue) {
        if (self.row as usize) >= CAPTURE_ROWS {
            return;
        }
        self.slots[self.row as usize][self.slot as usize] = value;
        self.slot += 1;
        if self.slot as usize == CAPTURE_SLOTS {
            self.slot = 0;
            self.row += 1;
        }
    }

    /// Read-only slot access for renderers. Unfilled and out-of-range
    /// slots both read EMPTY, so a display loop cannot panic the engine.
    #[inline]
    pub fn at(&self, row: usize, slot: usize) -> PieceValue {
        self.slots
            .get(row)
            .and_then(|slots| slots.get(slot))
            .copied()
            .unwrap_or(PieceValue::EMPTY)
    }

    /// Number of filled slots.
    pub fn count(&self) -> usize {
        self.row as usize * CAPTURE_SLOTS + self.slot as usize
    }
}
