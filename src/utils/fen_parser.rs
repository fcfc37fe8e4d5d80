//! FEN-to-GameState parser.
//!
//! Builds a full position from a Forsyth-Edwards Notation string: board
//! layout, side to move, castling rights and the en passant square, which
//! is materialized as an on-board marker owned by the side that just
//! moved. The move clocks are validated and discarded; the engine does not
//! count them.

use crate::board::grid::Board;
use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::board::square::Square;
use crate::errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::rules::castling::CastleSide;
use crate::utils::long_algebraic::square_from_algebraic;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut next_field = || {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))
    };

    let board_part = next_field()?;
    let side_part = next_field()?;
    let castling_part = next_field()?;
    let en_passant_part = next_field()?;
    let halfmove_part = next_field()?;
    let fullmove_part = next_field()?;
    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenString(fen.to_owned()));
    }

    let (board, kings) = parse_board(board_part, fen)?;
    let turn = parse_side_to_move(side_part, fen)?;

    let mut game = GameState::bare(board, turn, kings);
    game.castle_rights = parse_castling_rights(castling_part)?;

    if en_passant_part != "-" {
        let square = square_from_algebraic(en_passant_part)?;
        if !game.board.value(square).is_empty() {
            return Err(ChessErrors::InvalidFenString(fen.to_owned()));
        }
        // The marker belongs to the side that just double-stepped.
        let placer = turn.opposite();
        game.board.write(
            square,
            PieceValue::encode(placer, PieceKind::EnPassantMarker),
        );
        game.en_passant = Some(square);
    }

    halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(fen.to_owned()))?;

    Ok(game)
}

fn parse_board(board_part: &str, fen: &str) -> Result<(Board, [Square; 2]), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(fen.to_owned()));
    }

    let mut board = Board::empty();
    let mut kings: [Option<Square>; 2] = [None, None];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(step) = ch.to_digit(10) {
                if !(1..=8).contains(&step) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += step as u8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenString(fen.to_owned()));
                }
                continue;
            }

            let (team, kind) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            let square = Square::new(file, rank)
                .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_owned()))?;
            board.write(square, PieceValue::encode(team, kind));
            if kind == PieceKind::King {
                kings[team.index()] = Some(square);
            }
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenString(fen.to_owned()));
        }
    }

    let light = kings[0].ok_or(ChessErrors::MissingKing(Team::Light))?;
    let dark = kings[1].ok_or(ChessErrors::MissingKing(Team::Dark))?;
    Ok((board, [light, dark]))
}

fn parse_side_to_move(side_part: &str, fen: &str) -> Result<Team, ChessErrors> {
    match side_part {
        "w" => Ok(Team::Light),
        "b" => Ok(Team::Dark),
        _ => Err(ChessErrors::InvalidFenString(fen.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<u8, ChessErrors> {
    use crate::game_state::game_state::castle_bit;

    if castling_part == "-" {
        return Ok(0);
    }
    let mut rights = 0u8;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => castle_bit(Team::Light, CastleSide::KingSide),
            'Q' => castle_bit(Team::Light, CastleSide::QueenSide),
            'k' => castle_bit(Team::Dark, CastleSide::KingSide),
            'q' => castle_bit(Team::Dark, CastleSide::QueenSide),
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        };
    }
    Ok(rights)
}

fn piece_from_fen_char(ch: char) -> Option<(Team, PieceKind)> {
    let team = if ch.is_ascii_uppercase() {
        Team::Light
    } else if ch.is_ascii_lowercase() {
        Team::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((team, kind))
}
