//! Threat detection by brute force.
//!
//! A square is threatened when any opposing piece has a rule-legal capture
//! onto it. Rather than keep a second set of attack rules, the oracle
//! reuses [`crate::rules::piece_rules::validate`] with a synthetic probe
//! move whose capture snapshot is the probed team's king. The snapshot is
//! non-empty, so castling (which never captures) can never register as a
//! threat and the mutual castle-through-check checks cannot recurse.

use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::board::square::Square;
use crate::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::rules::piece_rules;

/// Whether any piece of `team.opposite()` could legally capture on
/// `square` right now. Side effects of the probe are discarded.
pub fn is_threatened(team: Team, square: Square, state: &GameState) -> bool {
    let synthetic_victim = PieceValue::encode(team, PieceKind::King);
    for origin in Square::all() {
        let occupant = state.board.value(origin);
        if occupant.is_empty() || occupant.kind() == PieceKind::EnPassantMarker {
            continue;
        }
        if occupant.team() == team {
            continue;
        }
        let probe = ChessMove {
            piece: occupant,
            capture: synthetic_victim,
            src: origin,
            dst: square,
        };
        if piece_rules::validate(&probe, state).is_legal() {
            return true;
        }
    }
    false
}
