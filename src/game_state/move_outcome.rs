//! Per-commit result codes.

/// Exactly one code is returned for every submitted move.
///
/// The first three are rejections and guarantee the position is
/// unmodified. The rest are successful-commit annotations describing the
/// resulting position for the side now to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move committed, nothing notable about the resulting position.
    Ok,
    /// The mover's color is not the side to move.
    WrongTurn,
    /// The move fails the piece or castling legality rules.
    IllegalMove,
    /// The move would leave the mover's own king threatened; the trial
    /// application was rolled back.
    SelfCheck,
    /// Move committed; the opposing king is now threatened but has replies.
    Check,
    /// Move committed; the opponent has no legal move and is not in check.
    Stalemate,
    /// Move committed; the opponent has no legal move and is in check.
    Checkmate,
}

impl MoveOutcome {
    /// Whether the move was committed (as opposed to rejected).
    pub const fn is_accepted(self) -> bool {
        !matches!(
            self,
            MoveOutcome::WrongTurn | MoveOutcome::IllegalMove | MoveOutcome::SelfCheck
        )
    }
}
