//! Promotion choice capability.
//!
//! The engine never decides what a pawn becomes: a chooser is injected at
//! game construction and consulted synchronously during the commit step of
//! a promoting move, at most once per such move. The choice set is closed
//! by construction, so a chooser cannot answer "king" or "pawn".

use crate::board::piece_value::{PieceKind, Team};
use crate::board::square::Square;

/// The four piece kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionChoice {
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Queen => PieceKind::Queen,
        }
    }
}

/// Collaborator consulted when a pawn reaches the far rank.
pub trait PromotionChooser {
    /// `team` is the promoting side and `destination` the promotion
    /// square, for choosers that present the position to a user.
    fn choose(&self, team: Team, destination: Square) -> PromotionChoice;
}

/// Default chooser: always promotes to queen.
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose(&self, _team: Team, _destination: Square) -> PromotionChoice {
        PromotionChoice::Queen
    }
}

impl<F> PromotionChooser for F
where
    F: Fn(Team, Square) -> PromotionChoice,
{
    fn choose(&self, team: Team, destination: Square) -> PromotionChoice {
        self(team, destination)
    }
}
