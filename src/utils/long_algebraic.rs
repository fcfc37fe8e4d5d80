//! Long algebraic coordinate notation.
//!
//! Strict four-character "e2e4" form. The parsed move carries the live
//! piece and capture snapshot read from the board at parse time, which is
//! exactly the shape the engine validates against.

use crate::board::square::Square;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::game_state::game_state::GameState;

/// Parses one square name like "e4".
pub fn square_from_algebraic(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    Square::new(file, rank).ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.file());
    let rank = char::from(b'1' + square.rank());
    format!("{file}{rank}")
}

/// Builds a submission-ready move from "e2e4" against the current board.
pub fn move_from_long_algebraic(
    state: &GameState,
    notation: &str,
) -> Result<ChessMove, ChessErrors> {
    // Byte length alone is not enough: a non-ASCII notation of four
    // bytes would make the two-byte slices below split a character.
    if notation.len() != 4 || !notation.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(notation.to_owned()));
    }
    let src = square_from_algebraic(&notation[0..2])?;
    let dst = square_from_algebraic(&notation[2..4])?;

    let piece = state.value(src);
    if piece.is_empty() {
        return Err(ChessErrors::MoveFromEmptySquare(notation.to_owned()));
    }

    Ok(ChessMove {
        piece,
        capture: state.value(dst),
        src,
        dst,
    })
}

pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    format!(
        "{}{}",
        square_to_algebraic(mv.src),
        square_to_algebraic(mv.dst)
    )
}
