//! Legal-move enumeration.
//!
//! Enumeration is defined by the commit path itself: a move is listed
//! exactly when submitting it to [`crate::engine::execute_move`] would be
//! accepted. Each rule-legal candidate is trial-applied on a value copy
//! and kept only if the mover's king ends up safe, so enumeration and
//! execution can never disagree.

use crate::board::piece_value::PieceKind;
use crate::board::square::Square;
use crate::chess_move::ChessMove;
use crate::engine::execute_move::{apply_accepted, trial_promotion};
use crate::game_state::game_state::GameState;
use crate::rules::piece_rules;
use crate::rules::side_effects::RuleVerdict;
use crate::rules::threat::is_threatened;

/// Every move the piece on `square` could commit right now. Empty when the
/// square is vacant, holds a marker, or belongs to the side not to move.
pub fn legal_moves(square: Square, state: &GameState) -> Vec<ChessMove> {
    let occupant = state.value(square);
    if occupant.is_empty()
        || occupant.kind() == PieceKind::EnPassantMarker
        || occupant.team() != state.turn()
    {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for dst in Square::all() {
        if dst == square {
            continue;
        }
        let candidate = ChessMove {
            piece: occupant,
            capture: state.value(dst),
            src: square,
            dst,
        };
        let RuleVerdict::Legal(effects) = piece_rules::validate(&candidate, state) else {
            continue;
        };
        let mut trial = state.clone();
        apply_accepted(&mut trial, &candidate, &effects, trial_promotion(&candidate));
        if !is_threatened(occupant.team(), trial.king(occupant.team()), &trial) {
            moves.push(candidate);
        }
    }
    moves
}

/// Whether the side to move has at least one legal move anywhere.
pub fn has_any_legal_move(state: &GameState) -> bool {
    Square::all().any(|square| !legal_moves(square, state).is_empty())
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, legal_moves};
    use crate::board::square::Square;
    use crate::engine::execute_move::execute_move;
    use crate::errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::game_state::move_outcome::MoveOutcome;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn opening_counts_match_the_standard_game() {
        let game = GameState::new_game();
        // Each knight has two squares, each pawn one or two.
        assert_eq!(legal_moves(sq(1, 0), &game).len(), 2);
        assert_eq!(legal_moves(sq(4, 1), &game).len(), 2);
        // Blocked pieces and the king have nothing yet.
        assert_eq!(legal_moves(sq(3, 0), &game).len(), 0);
        assert_eq!(legal_moves(sq(4, 0), &game).len(), 0);

        let total: usize = Square::all()
            .map(|square| legal_moves(square, &game).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn wrong_team_vacant_and_marker_squares_enumerate_nothing() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")?;
        // Light is not to move.
        assert!(legal_moves(sq(4, 3), &game).is_empty());
        // Vacant square and the marker square itself.
        assert!(legal_moves(sq(0, 3), &game).is_empty());
        assert!(legal_moves(sq(4, 2), &game).is_empty());
        // The dark pawn sees the en passant capture among its moves.
        let pawn_moves = legal_moves(sq(3, 3), &game);
        assert!(pawn_moves.iter().any(|mv| mv.dst == sq(4, 2)));
        Ok(())
    }

    #[test]
    fn pinned_pieces_lose_their_moves() -> Result<(), ChessErrors> {
        // Bishop on e2 is pinned to the king by the e8 rook.
        let game = GameState::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1")?;
        assert!(legal_moves(sq(4, 1), &game).is_empty());
        // The king itself can still step off the file.
        assert!(!legal_moves(sq(4, 0), &game).is_empty());
        assert!(has_any_legal_move(&game));
        Ok(())
    }

    #[test]
    fn every_enumerated_move_executes_as_accepted() -> Result<(), ChessErrors> {
        let game =
            GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0")?;
        for src in Square::all() {
            for mv in legal_moves(src, &game) {
                let mut fresh = game.clone();
                assert!(
                    execute_move(&mut fresh, &mv).is_accepted(),
                    "enumerated move {:?} was rejected",
                    mv
                );
            }
        }
        Ok(())
    }

    #[test]
    fn a_checkmated_side_has_no_moves() -> Result<(), ChessErrors> {
        // Back-rank mate: the king cannot step to h8, its own square g8
        // no longer blocks the rook once it leaves.
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")?;
        let mv = crate::utils::long_algebraic::move_from_long_algebraic(&game, "a1a8")?;
        assert_eq!(execute_move(&mut game, &mv), MoveOutcome::Checkmate);
        assert!(!has_any_legal_move(&game));
        Ok(())
    }
}
