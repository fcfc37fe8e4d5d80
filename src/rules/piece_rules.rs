//! Piece movement rules.
//!
//! One predicate per piece family, each deciding whether a candidate move
//! is geometrically and positionally legal on the current board, and which
//! side effects legality implies (see
//! [`crate::rules::side_effects`]). The rules read the board but never
//! mutate anything; the engine applies effects only on final acceptance.
//!
//! The dispatcher enforces the universal preconditions first: a move to
//! its own square is always illegal, and a same-team destination is
//! illegal unless it holds an en passant marker, in which case the capture
//! snapshot is coerced to EMPTY before delegation (a marker of one's own
//! color is never a capture target).

use crate::board::piece_value::{PieceKind, PieceValue};
use crate::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::rules::castling;
use crate::rules::side_effects::{RuleVerdict, SideEffect};

/// Universal precondition plus dispatch on the mover's kind.
pub fn validate(submitted: &ChessMove, state: &GameState) -> RuleVerdict {
    if submitted.src == submitted.dst {
        return RuleVerdict::Illegal;
    }

    let mut candidate = *submitted;
    if !candidate.capture.is_empty() && candidate.capture.team() == candidate.piece.team() {
        if candidate.capture.kind() == PieceKind::EnPassantMarker {
            candidate.capture = PieceValue::EMPTY;
        } else {
            return RuleVerdict::Illegal;
        }
    }

    match candidate.piece.kind() {
        PieceKind::Empty | PieceKind::EnPassantMarker => RuleVerdict::Illegal,
        PieceKind::Pawn => pawn_rule(&candidate, state),
        PieceKind::Knight => knight_rule(&candidate),
        PieceKind::King => king_rule(&candidate, state),
        PieceKind::Bishop => bishop_rule(&candidate, state),
        PieceKind::Rook => rook_rule(&candidate, state),
        PieceKind::Queen => queen_rule(&candidate, state),
    }
}

fn file_delta(mv: &ChessMove) -> i8 {
    mv.dst.file() as i8 - mv.src.file() as i8
}

fn rank_delta(mv: &ChessMove) -> i8 {
    mv.dst.rank() as i8 - mv.src.rank() as i8
}

/// Capturing moves must be single diagonal steps toward the opponent; a
/// captured marker additionally clears the pawn hiding one rank behind the
/// destination. Quiet moves stay on the file: one step forward, or two
/// from the home rank over an empty square, depositing a marker on it.
fn pawn_rule(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    let team = mv.piece.team();
    let forward = team.pawn_advance();
    let d_file = file_delta(mv);
    let d_rank = rank_delta(mv);

    if !mv.capture.is_empty() {
        if d_file.abs() == 1 && d_rank == forward {
            if mv.capture.kind() == PieceKind::EnPassantMarker {
                // The pawn actually being captured sits one rank behind
                // the marker, on the same file.
                return match mv.dst.offset(0, -forward) {
                    Some(victim) => RuleVerdict::Legal(vec![SideEffect::ClearSquare(victim)]),
                    None => RuleVerdict::Illegal,
                };
            }
            return RuleVerdict::legal_plain();
        }
        return RuleVerdict::Illegal;
    }

    if d_file != 0 {
        return RuleVerdict::Illegal;
    }
    if d_rank == forward {
        return RuleVerdict::legal_plain();
    }
    if d_rank == 2 * forward && mv.src.rank() == team.pawn_home_rank() {
        let Some(skipped) = mv.src.offset(0, forward) else {
            return RuleVerdict::Illegal;
        };
        if state.board.value(skipped).is_empty() {
            return RuleVerdict::Legal(vec![SideEffect::PlaceMarker {
                square: skipped,
                team,
            }]);
        }
    }
    RuleVerdict::Illegal
}

/// All eight L-shapes and nothing else satisfy df² + dr² == 5.
fn knight_rule(mv: &ChessMove) -> RuleVerdict {
    let d_file = file_delta(mv) as i16;
    let d_rank = rank_delta(mv) as i16;
    if d_file * d_file + d_rank * d_rank == 5 {
        RuleVerdict::legal_plain()
    } else {
        RuleVerdict::Illegal
    }
}

fn king_rule(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    let d_file = file_delta(mv);
    let d_rank = rank_delta(mv);
    if d_file.abs() <= 1 && d_rank.abs() <= 1 {
        return RuleVerdict::Legal(vec![SideEffect::SetKing {
            team: mv.piece.team(),
            square: mv.dst,
        }]);
    }
    if d_file.abs() == 2 {
        return castling::validate_castle(mv, state);
    }
    RuleVerdict::Illegal
}

/// Walks the squares strictly between src and dst; the path is clear when
/// none of them obstructs sliding (en passant markers do not).
fn path_clear(mv: &ChessMove, state: &GameState, step_file: i8, step_rank: i8) -> bool {
    let mut current = mv.src.offset(step_file, step_rank);
    while let Some(square) = current {
        if square == mv.dst {
            return true;
        }
        if state.board.value(square).obstructs_sliding() {
            return false;
        }
        current = square.offset(step_file, step_rank);
    }
    false
}

fn bishop_rule(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    let d_file = file_delta(mv);
    let d_rank = rank_delta(mv);
    if d_file.abs() != d_rank.abs() || d_file == 0 {
        return RuleVerdict::Illegal;
    }
    if path_clear(mv, state, d_file.signum(), d_rank.signum()) {
        RuleVerdict::legal_plain()
    } else {
        RuleVerdict::Illegal
    }
}

fn rook_rule(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    let d_file = file_delta(mv);
    let d_rank = rank_delta(mv);
    if (d_file == 0) == (d_rank == 0) {
        return RuleVerdict::Illegal;
    }
    if path_clear(mv, state, d_file.signum(), d_rank.signum()) {
        RuleVerdict::legal_plain()
    } else {
        RuleVerdict::Illegal
    }
}

/// Pure composition: queen-legal is rook-legal or bishop-legal.
fn queen_rule(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    let as_rook = rook_rule(mv, state);
    if as_rook.is_legal() {
        return as_rook;
    }
    bishop_rule(mv, state)
}
