//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a position for debugging, tests, and
//! diagnostics in text environments.

use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::board::square::Square;
use crate::game_state::capture_zone::{CAPTURE_ROWS, CAPTURE_SLOTS};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is printed first. Empty squares render as `·` and live en
/// passant markers as `×`.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            out.push(cell_glyph(state.value(square)));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Render one side's capture zone, most recent capture last.
pub fn render_capture_zone(state: &GameState, team: Team) -> String {
    let mut out = String::new();
    for row in 0..CAPTURE_ROWS {
        for slot in 0..CAPTURE_SLOTS {
            let cell = state.capture_at(team, row, slot);
            if cell.is_empty() {
                break;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push(cell_glyph(cell));
        }
    }
    out
}

fn cell_glyph(cell: PieceValue) -> char {
    match (cell.team(), cell.kind()) {
        (_, PieceKind::Empty) => '·',
        (_, PieceKind::EnPassantMarker) => '×',
        (Team::Light, PieceKind::Pawn) => '♙',
        (Team::Light, PieceKind::Knight) => '♘',
        (Team::Light, PieceKind::Bishop) => '♗',
        (Team::Light, PieceKind::Rook) => '♖',
        (Team::Light, PieceKind::Queen) => '♕',
        (Team::Light, PieceKind::King) => '♔',
        (Team::Dark, PieceKind::Pawn) => '♟',
        (Team::Dark, PieceKind::Knight) => '♞',
        (Team::Dark, PieceKind::Bishop) => '♝',
        (Team::Dark, PieceKind::Rook) => '♜',
        (Team::Dark, PieceKind::Queen) => '♛',
        (Team::Dark, PieceKind::King) => '♚',
    }
}
