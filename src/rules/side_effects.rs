//! Board side effects implied by a legal move.
//!
//! Chess couples "is this legal" with "what else happens": a legal en
//! passant capture removes a pawn that is not on the destination square, a
//! legal castle relocates a rook, a legal king step moves the cached king
//! location. The piece rules keep that coupling but make it explicit: a
//! rule answers with a verdict *and* the effects the move requires, and
//! the engine applies those effects atomically only if the move is
//! ultimately accepted. Threat probes discard them.

use crate::board::piece_value::Team;
use crate::board::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Remove whatever occupies the square (the en passant victim pawn).
    ClearSquare(Square),
    /// Deposit an en passant marker owned by `team` and record it.
    PlaceMarker { square: Square, team: Team },
    /// Relocate the castling rook.
    MoveRook { from: Square, to: Square },
    /// Update the cached king location.
    SetKing { team: Team, square: Square },
}

/// Verdict of a piece rule for one candidate move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    Illegal,
    Legal(Vec<SideEffect>),
}

impl RuleVerdict {
    /// A legal move with no side effects beyond the relocation itself.
    pub fn legal_plain() -> Self {
        RuleVerdict::Legal(Vec::new())
    }

    pub fn is_legal(&self) -> bool {
        matches!(self, RuleVerdict::Legal(_))
    }
}
