//! The commit protocol.
//!
//! `execute_move` is the only public entry point that mutates a game. It
//! walks a fixed sequence: turn check, snapshot check, rule validation,
//! promotion choice, then a trial application on a value copy. Only if the
//! trial leaves the mover's own king safe does the copy replace the real
//! state; a rejected move leaves the game bit-for-bit untouched.

use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::chess_move::ChessMove;
use crate::engine::legal_moves::has_any_legal_move;
use crate::game_state::game_state::GameState;
use crate::game_state::move_outcome::MoveOutcome;
use crate::rules::castling;
use crate::rules::piece_rules;
use crate::rules::side_effects::{RuleVerdict, SideEffect};
use crate::rules::threat::is_threatened;

/// Validates and, if legal, commits `submitted`.
pub fn execute_move(state: &mut GameState, submitted: &ChessMove) -> MoveOutcome {
    let mover = submitted.piece.team();
    if mover != state.turn {
        return MoveOutcome::WrongTurn;
    }

    // The submission snapshot must match the live board; a stale client
    // view is an illegal move, not a crash.
    if state.board.value(submitted.src) != submitted.piece
        || state.board.value(submitted.dst) != submitted.capture
    {
        return MoveOutcome::IllegalMove;
    }

    let RuleVerdict::Legal(effects) = piece_rules::validate(submitted, state) else {
        return MoveOutcome::IllegalMove;
    };

    // The chooser is consulted exactly here, before the trial, at most
    // once per submission.
    let promoted = if is_promotion(submitted) {
        Some(state.chooser.choose(mover, submitted.dst).kind())
    } else {
        None
    };

    let mut working = state.clone();
    apply_accepted(&mut working, submitted, &effects, promoted);
    if is_threatened(mover, working.king(mover), &working) {
        return MoveOutcome::SelfCheck;
    }

    let opponent = mover.opposite();
    working.check = is_threatened(opponent, working.king(opponent), &working);
    let replies = has_any_legal_move(&working);
    working.checkmate = working.check && !replies;
    working.stalemate = !working.check && !replies;

    let outcome = if working.checkmate {
        MoveOutcome::Checkmate
    } else if working.stalemate {
        MoveOutcome::Stalemate
    } else if working.check {
        MoveOutcome::Check
    } else {
        MoveOutcome::Ok
    };
    *state = working;
    outcome
}

/// Whether this move is a pawn reaching its promotion rank.
pub(crate) fn is_promotion(mv: &ChessMove) -> bool {
    mv.piece.kind() == PieceKind::Pawn && mv.dst.rank() == mv.piece.team().promotion_rank()
}

/// Promotion kind used on trial copies, where no chooser may run.
pub(crate) fn trial_promotion(mv: &ChessMove) -> Option<PieceKind> {
    if is_promotion(mv) {
        Some(PieceKind::Queen)
    } else {
        None
    }
}

/// Applies an already-validated move to `state` in place: stale-marker
/// purge, relocation (with promotion), rule side effects, capture
/// bookkeeping, rights revocation and the turn flip. Status flags are the
/// caller's business.
pub(crate) fn apply_accepted(
    state: &mut GameState,
    mv: &ChessMove,
    effects: &[SideEffect],
    promoted: Option<PieceKind>,
) {
    let mover = mv.piece.team();
    purge_stale_marker(state, mover);

    state.board.clear(mv.src);
    let placed = match promoted {
        Some(kind) => PieceValue::encode(mover, kind),
        None => mv.piece,
    };
    state.board.write(mv.dst, placed);

    for effect in effects {
        match *effect {
            SideEffect::ClearSquare(square) => state.board.clear(square),
            SideEffect::PlaceMarker { square, team } => {
                state
                    .board
                    .write(square, PieceValue::encode(team, PieceKind::EnPassantMarker));
                state.en_passant = Some(square);
            }
            SideEffect::MoveRook { from, to } => {
                let rook = state.board.value(from);
                state.board.clear(from);
                state.board.write(to, rook);
            }
            SideEffect::SetKing { team, square } => state.kings[team.index()] = square,
        }
    }

    record_capture(state, mover, mv.capture);
    castling::revoke_for_vacated(state, mv.src);
    state.turn = mover.opposite();
}

/// A marker placed by the opponent has now been visible for exactly one
/// reply; it leaves the board with this commit. Runs after validation, so
/// a capture onto the marker square still saw it.
fn purge_stale_marker(state: &mut GameState, mover: Team) {
    if let Some(square) = state.en_passant.take() {
        let cell = state.board.value(square);
        if cell.kind() == PieceKind::EnPassantMarker && cell.team() != mover {
            state.board.clear(square);
        }
    }
}

/// Files the captured piece in the mover's capture zone. A captured
/// opposing marker stands in for the pawn behind it and is recorded as a
/// pawn of that color; a same-color marker was coerced away during
/// validation and records nothing.
fn record_capture(state: &mut GameState, mover: Team, capture: PieceValue) {
    if capture.is_empty() {
        return;
    }
    let recorded = if capture.kind() == PieceKind::EnPassantMarker {
        if capture.team() == mover {
            return;
        }
        PieceValue::encode(capture.team(), PieceKind::Pawn)
    } else {
        capture
    };
    state.captures[mover.index()].push(recorded);
}

#[cfg(test)]
mod tests {
    use super::execute_move;
    use crate::board::piece_value::{PieceKind, PieceValue, Team};
    use crate::board::square::Square;
    use crate::chess_move::ChessMove;
    use crate::errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::game_state::move_outcome::MoveOutcome;
    use crate::game_state::promotion::PromotionChoice;
    use crate::rules::castling::CastleSide;
    use crate::utils::long_algebraic::move_from_long_algebraic;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn play(game: &mut GameState, notation: &str) -> Result<MoveOutcome, ChessErrors> {
        let mv = move_from_long_algebraic(game, notation)?;
        Ok(execute_move(game, &mv))
    }

    #[test]
    fn opening_move_commits_and_flips_the_turn() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        assert_eq!(play(&mut game, "e2e4")?, MoveOutcome::Ok);
        assert_eq!(game.turn(), Team::Dark);
        assert!(game.value(sq(4, 1)).is_empty());
        assert_eq!(
            game.value(sq(4, 3)),
            PieceValue::encode(Team::Light, PieceKind::Pawn)
        );
        Ok(())
    }

    #[test]
    fn moving_out_of_turn_is_rejected() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let mv = move_from_long_algebraic(&game, "e7e5")?;
        assert_eq!(execute_move(&mut game, &mv), MoveOutcome::WrongTurn);
        assert!(game.same_position(&GameState::new_game()));
        Ok(())
    }

    #[test]
    fn illegal_geometry_is_rejected_without_mutation() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = move_from_long_algebraic(&game, "e2e5")?;
        assert_eq!(execute_move(&mut game, &mv), MoveOutcome::IllegalMove);
        assert!(game.same_position(&before));
        Ok(())
    }

    #[test]
    fn stale_capture_snapshot_is_rejected() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        // Claims there is something to capture on e4.
        let mv = ChessMove {
            piece: game.value(sq(4, 1)),
            capture: PieceValue::encode(Team::Dark, PieceKind::Pawn),
            src: sq(4, 1),
            dst: sq(4, 3),
        };
        assert_eq!(execute_move(&mut game, &mv), MoveOutcome::IllegalMove);
        Ok(())
    }

    #[test]
    fn double_step_opens_a_one_reply_en_passant_window() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        assert_eq!(play(&mut game, "e2e4")?, MoveOutcome::Ok);
        let e3 = sq(4, 2);
        assert_eq!(game.en_passant_square(), Some(e3));
        assert_eq!(
            game.value(e3),
            PieceValue::encode(Team::Light, PieceKind::EnPassantMarker)
        );

        // Any dark reply that is not the capture purges the marker.
        assert_eq!(play(&mut game, "g8f6")?, MoveOutcome::Ok);
        assert_eq!(game.en_passant_square(), None);
        assert!(game.value(e3).is_empty());
        Ok(())
    }

    #[test]
    fn en_passant_capture_removes_the_pawn_behind_the_marker() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        assert_eq!(play(&mut game, "e2e4")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "d7d5")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "e4e5")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "f7f5")?, MoveOutcome::Ok);
        // e5 pawn takes the f6 marker.
        assert_eq!(play(&mut game, "e5f6")?, MoveOutcome::Ok);
        assert!(game.value(sq(5, 4)).is_empty());
        assert_eq!(
            game.value(sq(5, 5)),
            PieceValue::encode(Team::Light, PieceKind::Pawn)
        );
        // The dark pawn lands in light's capture zone.
        assert_eq!(
            game.capture_at(Team::Light, 0, 0),
            PieceValue::encode(Team::Dark, PieceKind::Pawn)
        );
        Ok(())
    }

    #[test]
    fn capture_is_recorded_in_the_mover_zone() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        assert_eq!(play(&mut game, "e2e4")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "d7d5")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "e4d5")?, MoveOutcome::Ok);
        assert_eq!(
            game.capture_at(Team::Light, 0, 0),
            PieceValue::encode(Team::Dark, PieceKind::Pawn)
        );
        assert!(game.capture_at(Team::Dark, 0, 0).is_empty());
        Ok(())
    }

    #[test]
    fn self_check_is_rolled_back_completely() -> Result<(), ChessErrors> {
        // The bishop on e2 shields e1 from the e8 rook.
        let mut game = GameState::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1")?;
        let before = game.clone();
        assert_eq!(play(&mut game, "e2a6")?, MoveOutcome::SelfCheck);
        assert!(game.same_position(&before));
        // Every bishop move leaves the file, so all of them are pinned.
        assert_eq!(play(&mut game, "e2d3")?, MoveOutcome::SelfCheck);
        assert!(game.same_position(&before));
        Ok(())
    }

    #[test]
    fn castling_relocates_the_rook_and_spends_the_rights() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")?;
        assert_eq!(play(&mut game, "e1g1")?, MoveOutcome::Ok);
        assert_eq!(
            game.value(sq(6, 0)),
            PieceValue::encode(Team::Light, PieceKind::King)
        );
        assert_eq!(
            game.value(sq(5, 0)),
            PieceValue::encode(Team::Light, PieceKind::Rook)
        );
        assert!(game.value(sq(4, 0)).is_empty());
        assert!(game.value(sq(7, 0)).is_empty());
        assert_eq!(game.king(Team::Light), sq(6, 0));
        assert!(!game.can_castle(Team::Light, CastleSide::KingSide));
        assert!(!game.can_castle(Team::Light, CastleSide::QueenSide));
        assert!(game.can_castle(Team::Dark, CastleSide::KingSide));
        Ok(())
    }

    #[test]
    fn rights_are_revoked_by_vacating_and_never_restored() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")?;
        assert_eq!(play(&mut game, "a1a2")?, MoveOutcome::Ok);
        assert!(!game.can_castle(Team::Light, CastleSide::QueenSide));
        assert!(game.can_castle(Team::Light, CastleSide::KingSide));

        // Moving the rook back home does not restore anything.
        assert_eq!(play(&mut game, "a8a7")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "a2a1")?, MoveOutcome::Ok);
        assert!(!game.can_castle(Team::Light, CastleSide::QueenSide));
        Ok(())
    }

    #[test]
    fn fools_mate_is_checkmate() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        assert_eq!(play(&mut game, "f2f3")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "e7e5")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "g2g4")?, MoveOutcome::Ok);
        assert_eq!(play(&mut game, "d8h4")?, MoveOutcome::Checkmate);
        assert!(game.is_checkmate());
        assert!(game.is_check());
        assert!(game.is_over());

        // Checkmate leaves the loser with no moves anywhere.
        for src in Square::all() {
            assert!(crate::engine::legal_moves::legal_moves(src, &game).is_empty());
        }
        Ok(())
    }

    #[test]
    fn bare_king_with_no_moves_is_stalemate() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1")?;
        assert_eq!(play(&mut game, "f2f7")?, MoveOutcome::Stalemate);
        assert!(game.is_stalemate());
        assert!(!game.is_check());
        assert!(game.is_over());
        Ok(())
    }

    #[test]
    fn check_is_reported_when_replies_exist() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")?;
        assert_eq!(play(&mut game, "a1a8")?, MoveOutcome::Check);
        assert!(game.is_check());
        assert!(!game.is_over());
        Ok(())
    }

    #[test]
    fn promotion_consults_the_injected_chooser_once() -> Result<(), ChessErrors> {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let chooser = move |_team: Team, _dst: Square| {
            seen.set(seen.get() + 1);
            PromotionChoice::Knight
        };
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")?
            .with_chooser(Rc::new(chooser));

        assert_eq!(play(&mut game, "a7a8")?, MoveOutcome::Ok);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            game.value(sq(0, 7)),
            PieceValue::encode(Team::Light, PieceKind::Knight)
        );
        Ok(())
    }

    #[test]
    fn default_promotion_is_a_queen() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")?;
        assert_eq!(play(&mut game, "a7a8")?, MoveOutcome::Ok);
        assert_eq!(
            game.value(sq(0, 7)),
            PieceValue::encode(Team::Light, PieceKind::Queen)
        );
        Ok(())
    }
}
