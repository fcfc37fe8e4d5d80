//! The move value submitted to the engine.

use crate::board::piece_value::PieceValue;
use crate::board::square::Square;

/// One requested move.
///
/// `capture` is a snapshot of the destination cell as the caller observed
/// it immediately before submission, not a live read; the engine validates
/// against it and records it for capture bookkeeping. The same shape is
/// produced transiently by the legal-move enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    /// The moving piece's cell value, including its team bit.
    pub piece: PieceValue,
    /// Destination cell as observed at submission time.
    pub capture: PieceValue,
    pub src: Square,
    pub dst: Square,
}
