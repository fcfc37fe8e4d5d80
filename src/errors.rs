//! Errors used throughout the rules engine.
//!
//! This enum covers construction and notation failures only. Rejected
//! moves are *not* errors: the engine reports those through
//! [`crate::game_state::move_outcome::MoveOutcome`] with the position
//! guaranteed unmodified, and a malformed coordinate is unrepresentable by
//! construction (`Square` cannot hold an off-board value).

use crate::board::piece_value::Team;

/// Unified error type for position and move notation handling.
///
/// Each variant carries the offending input where that helps diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A FEN string contained a character that is not a piece letter,
    /// digit, or rank separator in the field where it appeared.
    InvalidFenToken(char),

    /// A FEN string was structurally malformed (missing fields, a rank
    /// overflowing eight files, and so on). Payload: the original string.
    InvalidFenString(String),

    /// The parsed position has no king for the given team. The king
    /// location cache cannot be built from such a position.
    MissingKing(Team),

    /// A coordinate-notation string ("e2e4") failed to parse.
    InvalidAlgebraicString(String),

    /// A coordinate-notation move names an empty source square, so no
    /// mover snapshot can be taken from the board.
    MoveFromEmptySquare(String),
}

impl std::fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChessErrors::InvalidFenToken(c) => write!(f, "invalid FEN token '{c}'"),
            ChessErrors::InvalidFenString(s) => write!(f, "invalid FEN string \"{s}\""),
            ChessErrors::MissingKing(team) => write!(f, "position has no {team:?} king"),
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid coordinate notation \"{s}\"")
            }
            ChessErrors::MoveFromEmptySquare(s) => {
                write!(f, "move \"{s}\" starts from an empty square")
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
