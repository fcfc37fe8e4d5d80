//! Packed board storage.
//!
//! Eight `u32` rows, one per rank, four bits per file. This is a pure
//! accessor layer: `write` overwrites unconditionally and performs no
//! legality checking. Bounds are guaranteed by [`Square`]'s construction,
//! so no access here can be out of range.

use crate::board::piece_value::PieceValue;
use crate::board::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: [u32; 8],
}

impl Board {
    pub const fn empty() -> Self {
        Board { rows: [0; 8] }
    }

    /// Reads the cell at `square`.
    #[inline]
    pub fn value(&self, square: Square) -> PieceValue {
        let shift = (square.file() as u32) << 2;
        PieceValue::from_raw(((self.rows[square.rank() as usize] >> shift) & 0xF) as u8)
    }

    /// Unconditionally overwrites the cell at `square`.
    #[inline]
    pub fn write(&mut self, square: Square, value: PieceValue) {
        let shift = (square.file() as u32) << 2;
        let row = &mut self.rows[square.rank() as usize];
        *row = (*row & !(0xF << shift)) | ((value.raw() as u32) << shift);
    }

    /// Writes EMPTY at `square`.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.write(square, PieceValue::EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::board::piece_value::{PieceKind, PieceValue, Team};
    use crate::board::square::Square;

    #[test]
    fn write_read_clear_round_trip() {
        let mut board = Board::empty();
        let e4 = Square::new(4, 3).unwrap();
        let queen = PieceValue::encode(Team::Dark, PieceKind::Queen);

        assert!(board.value(e4).is_empty());
        board.write(e4, queen);
        assert_eq!(board.value(e4), queen);

        // Overwrite without clearing first.
        let pawn = PieceValue::encode(Team::Light, PieceKind::Pawn);
        board.write(e4, pawn);
        assert_eq!(board.value(e4), pawn);

        board.clear(e4);
        assert!(board.value(e4).is_empty());
    }

    #[test]
    fn neighboring_cells_are_independent() {
        let mut board = Board::empty();
        let d1 = Square::new(3, 0).unwrap();
        let e1 = Square::new(4, 0).unwrap();
        let e2 = Square::new(4, 1).unwrap();

        board.write(e1, PieceValue::encode(Team::Light, PieceKind::King));
        assert!(board.value(d1).is_empty());
        assert!(board.value(e2).is_empty());

        board.write(d1, PieceValue::encode(Team::Light, PieceKind::Queen));
        assert_eq!(
            board.value(e1),
            PieceValue::encode(Team::Light, PieceKind::King)
        );
    }
}
