//! The owning game state.
//!
//! Created once per game, then mutated exclusively by the move engine's
//! commit step. Trial evaluation (self-check rejection, enumeration) works
//! on cheap value copies of this struct; `Clone` is a plain memcpy plus an
//! `Rc` bump for the promotion chooser.

use std::rc::Rc;

use crate::board::grid::Board;
use crate::board::piece_value::{PieceValue, Team};
use crate::board::square::Square;
use crate::errors::ChessErrors;
use crate::game_state::capture_zone::CaptureZone;
use crate::game_state::promotion::{AlwaysQueen, PromotionChooser};
use crate::rules::castling::CastleSide;
use crate::utils::fen_parser::parse_fen;

pub const OPENING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling-rights bit for a team and side. Four independent bits, each
/// monotonically clearable and never restored.
pub const fn castle_bit(team: Team, side: CastleSide) -> u8 {
    let side_bit = match side {
        CastleSide::KingSide => 0,
        CastleSide::QueenSide => 1,
    };
    1 << ((team.index() as u8) * 2 + side_bit)
}

#[derive(Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Team,
    pub(crate) castle_rights: u8,
    /// Cached king location per team; always equal to the unique
    /// KING-typed square of that team. Updated together with the board,
    /// never one without the other.
    pub(crate) kings: [Square; 2],
    /// Square of the live en passant marker, if one is on the board.
    pub(crate) en_passant: Option<Square>,
    pub(crate) captures: [CaptureZone; 2],
    pub(crate) check: bool,
    pub(crate) stalemate: bool,
    pub(crate) checkmate: bool,
    pub(crate) chooser: Rc<dyn PromotionChooser>,
}

impl GameState {
    /// Lays out the standard opening position with the default
    /// always-queen promotion chooser.
    pub fn new_game() -> Self {
        parse_fen(OPENING_FEN).expect("Opening position string must have been corrupted")
    }

    /// Builds a position from a FEN string. Capture zones start empty and
    /// the promotion chooser defaults to [`AlwaysQueen`]; use
    /// [`GameState::with_chooser`] to inject another.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Replaces the promotion chooser capability.
    pub fn with_chooser(mut self, chooser: Rc<dyn PromotionChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    pub(crate) fn bare(board: Board, turn: Team, kings: [Square; 2]) -> Self {
        GameState {
            board,
            turn,
            castle_rights: 0,
            kings,
            en_passant: None,
            captures: [CaptureZone::empty(); 2],
            check: false,
            stalemate: false,
            checkmate: false,
            chooser: Rc::new(AlwaysQueen),
        }
    }

    /// Read-only cell query for renderers and wire mirroring.
    #[inline]
    pub fn value(&self, square: Square) -> PieceValue {
        self.board.value(square)
    }

    /// Read-only capture-zone slot query for renderers.
    #[inline]
    pub fn capture_at(&self, team: Team, row: usize, slot: usize) -> PieceValue {
        self.captures[team.index()].at(row, slot)
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn king(&self, team: Team) -> Square {
        self.kings[team.index()]
    }

    #[inline]
    pub fn can_castle(&self, team: Team, side: CastleSide) -> bool {
        self.castle_rights & castle_bit(team, side) != 0
    }

    /// The raw four-bit rights mask, for diagnostics.
    #[inline]
    pub fn castle_rights_mask(&self) -> u8 {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.check
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.stalemate || self.checkmate
    }

    /// Clears a rights bit. Rights only ever go from set to clear.
    #[inline]
    pub(crate) fn revoke_castle(&mut self, team: Team, side: CastleSide) {
        self.castle_rights &= !castle_bit(team, side);
    }

    /// Positions are compared on everything observable except the chooser.
    pub fn same_position(&self, other: &GameState) -> bool {
        self.board == other.board
            && self.turn == other.turn
            && self.castle_rights == other.castle_rights
            && self.kings == other.kings
            && self.en_passant == other.en_passant
            && self.captures == other.captures
            && self.check == other.check
            && self.stalemate == other.stalemate
            && self.checkmate == other.checkmate
    }
}
