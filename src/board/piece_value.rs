//! Four-bit piece cells.
//!
//! Every board square holds one nibble: the low three bits select the piece
//! kind and bit 3 selects the team. The kind codes are laid out so that
//! `cell & 0x3` is zero exactly for EMPTY and the en passant marker, which
//! is what lets sliding pieces traverse marker squares (see
//! [`PieceValue::obstructs_sliding`]).

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::Light => 0,
            Team::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Rank direction a pawn of this team advances in.
    #[inline]
    pub const fn pawn_advance(self) -> i8 {
        match self {
            Team::Light => 1,
            Team::Dark => -1,
        }
    }

    /// Rank a pawn of this team starts on.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Team::Light => 1,
            Team::Dark => 6,
        }
    }

    /// Far rank where a pawn of this team promotes.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Team::Light => 7,
            Team::Dark => 0,
        }
    }
}

/// Piece kind selected by the low three bits of a cell.
///
/// `EnPassantMarker` is a transient placeholder, never a real piece: it
/// records a just-played two-square pawn advance so the pawn rule can
/// recognize a capture onto the square the pawn skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    King,
    EnPassantMarker,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Empty => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::King => 3,
            PieceKind::EnPassantMarker => 4,
            PieceKind::Bishop => 5,
            PieceKind::Rook => 6,
            PieceKind::Queen => 7,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Self {
        match code & 0x7 {
            0 => PieceKind::Empty,
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::King,
            4 => PieceKind::EnPassantMarker,
            5 => PieceKind::Bishop,
            6 => PieceKind::Rook,
            _ => PieceKind::Queen,
        }
    }
}

const TEAM_BIT: u8 = 0x8;

/// One encoded board cell: kind in bits 0..=2, team in bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValue(u8);

impl PieceValue {
    pub const EMPTY: PieceValue = PieceValue(0);

    #[inline]
    pub const fn encode(team: Team, kind: PieceKind) -> Self {
        let team_bit = match team {
            Team::Light => 0,
            Team::Dark => TEAM_BIT,
        };
        PieceValue(team_bit | kind.code())
    }

    /// Wraps a raw nibble, masking anything above the low four bits.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        PieceValue(raw & 0xF)
    }

    /// The raw cell encoding, for renderers and wire mirroring.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_code(self.0)
    }

    /// The team bit. EMPTY cells ignore color and report `Light`; check
    /// [`PieceValue::is_empty`] first where that matters.
    #[inline]
    pub const fn team(self) -> Team {
        if self.0 & TEAM_BIT == 0 {
            Team::Light
        } else {
            Team::Dark
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether this cell blocks a sliding piece's path.
    ///
    /// Checks `cell & 0x3` rather than mere presence, so EMPTY and the en
    /// passant marker do not obstruct while every real piece does.
    #[inline]
    pub const fn obstructs_sliding(self) -> bool {
        self.0 & 0x3 != 0
    }
}
