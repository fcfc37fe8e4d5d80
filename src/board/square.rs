//! Bounded board coordinates.
//!
//! A `Square` can only be constructed inside the 8x8 board, so the rest of
//! the engine never has to range-check a coordinate at runtime: an
//! off-board square simply cannot exist.

/// A coordinate on the board. `file` and `rank` are always in `0..=7`;
/// `(0, 0)` is a1 and `(7, 7)` is h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Builds a square, or `None` when either index is outside `0..=7`.
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Steps this square by a file and rank offset, staying on the board.
    ///
    /// Returns `None` when the step would leave the board, which callers
    /// use as the natural "ray ran off the edge" terminator.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i16 + d_file as i16;
        let rank = self.rank as i16 + d_rank as i16;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Iterates every square once, rank-major from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}
