//! Castling legality and rights bookkeeping.
//!
//! The four castle variants are fixed geometry, so they live in a const
//! table: king route, rook route, the squares that must be vacant, and the
//! squares the king occupies or crosses, which must all be unthreatened.
//! Rights are revoked by *vacating* a home square, never restored; the
//! rook's physical presence is still re-checked at validation time because
//! a rights bit alone does not prove the rook survived.

use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::board::square::Square;
use crate::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::rules::side_effects::{RuleVerdict, SideEffect};
use crate::rules::threat::is_threatened;

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

const fn sq(file: u8, rank: u8) -> Square {
    match Square::new(file, rank) {
        Some(square) => square,
        None => panic!("castle table coordinate off the board"),
    }
}

struct CastleSlot {
    team: Team,
    side: CastleSide,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    /// Squares between king and rook, all of which must be vacant.
    between: &'static [Square],
    /// Current, crossed and destination king squares, none of which may be
    /// threatened.
    king_path: [Square; 3],
}

const CASTLE_SLOTS: [CastleSlot; 4] = [
    CastleSlot {
        team: Team::Light,
        side: CastleSide::KingSide,
        king_from: sq(4, 0),
        king_to: sq(6, 0),
        rook_from: sq(7, 0),
        rook_to: sq(5, 0),
        between: &[sq(5, 0), sq(6, 0)],
        king_path: [sq(4, 0), sq(5, 0), sq(6, 0)],
    },
    CastleSlot {
        team: Team::Light,
        side: CastleSide::QueenSide,
        king_from: sq(4, 0),
        king_to: sq(2, 0),
        rook_from: sq(0, 0),
        rook_to: sq(3, 0),
        between: &[sq(1, 0), sq(2, 0), sq(3, 0)],
        king_path: [sq(4, 0), sq(3, 0), sq(2, 0)],
    },
    CastleSlot {
        team: Team::Dark,
        side: CastleSide::KingSide,
        king_from: sq(4, 7),
        king_to: sq(6, 7),
        rook_from: sq(7, 7),
        rook_to: sq(5, 7),
        between: &[sq(5, 7), sq(6, 7)],
        king_path: [sq(4, 7), sq(5, 7), sq(6, 7)],
    },
    CastleSlot {
        team: Team::Dark,
        side: CastleSide::QueenSide,
        king_from: sq(4, 7),
        king_to: sq(2, 7),
        rook_from: sq(0, 7),
        rook_to: sq(3, 7),
        between: &[sq(1, 7), sq(2, 7), sq(3, 7)],
        king_path: [sq(4, 7), sq(3, 7), sq(2, 7)],
    },
];

/// Validates a two-file king move as a castle attempt.
///
/// Castling never captures, so any non-empty capture snapshot is rejected
/// outright. Threat probes always carry a synthetic capture, which is what
/// keeps this function out of the threat oracle's reach.
pub fn validate_castle(mv: &ChessMove, state: &GameState) -> RuleVerdict {
    if !mv.capture.is_empty() {
        return RuleVerdict::Illegal;
    }
    let team = mv.piece.team();
    let Some(slot) = CASTLE_SLOTS
        .iter()
        .find(|slot| slot.team == team && slot.king_from == mv.src && slot.king_to == mv.dst)
    else {
        return RuleVerdict::Illegal;
    };

    if !state.can_castle(team, slot.side) {
        return RuleVerdict::Illegal;
    }
    if state.board.value(slot.rook_from) != PieceValue::encode(team, PieceKind::Rook) {
        return RuleVerdict::Illegal;
    }
    for square in slot.between {
        if !state.board.value(*square).is_empty() {
            return RuleVerdict::Illegal;
        }
    }
    for square in slot.king_path {
        if is_threatened(team, square, state) {
            return RuleVerdict::Illegal;
        }
    }

    RuleVerdict::Legal(vec![
        SideEffect::MoveRook {
            from: slot.rook_from,
            to: slot.rook_to,
        },
        SideEffect::SetKing {
            team,
            square: mv.dst,
        },
    ])
}

/// Revokes whatever rights depend on `square` being occupied by its
/// original piece. Called by the commit step with the source square of
/// every accepted move.
pub(crate) fn revoke_for_vacated(state: &mut GameState, square: Square) {
    match (square.file(), square.rank()) {
        (4, 0) => {
            state.revoke_castle(Team::Light, CastleSide::KingSide);
            state.revoke_castle(Team::Light, CastleSide::QueenSide);
        }
        (7, 0) => state.revoke_castle(Team::Light, CastleSide::KingSide),
        (0, 0) => state.revoke_castle(Team::Light, CastleSide::QueenSide),
        (4, 7) => {
            state.revoke_castle(Team::Dark, CastleSide::KingSide);
            state.revoke_castle(Team::Dark, CastleSide::QueenSide);
        }
        (7, 7) => state.revoke_castle(Team::Dark, CastleSide::KingSide),
        (0, 7) => state.revoke_castle(Team::Dark, CastleSide::QueenSide),
        _ => {}
    }
}
