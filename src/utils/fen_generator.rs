//! GameState-to-FEN generator.
//!
//! Emits the four position fields: board layout, side to move, castling
//! rights and the en passant square. En passant markers are internal
//! bookkeeping and render as empty squares; the marker's location still
//! appears in the en passant field. Clocks are not tracked, so callers
//! needing a six-field string append their own.

use crate::board::piece_value::{PieceKind, PieceValue, Team};
use crate::board::square::Square;
use crate::game_state::game_state::GameState;
use crate::rules::castling::CastleSide;
use crate::utils::long_algebraic::square_to_algebraic;

pub fn position_fen(state: &GameState) -> String {
    let board = board_field(state);
    let side = match state.turn() {
        Team::Light => "w",
        Team::Dark => "b",
    };
    let castling = castling_field(state);
    let en_passant = match state.en_passant_square() {
        Some(square) => square_to_algebraic(square),
        None => "-".to_owned(),
    };

    format!("{} {} {} {}", board, side, castling, en_passant)
}

fn board_field(state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            match fen_char(state.value(square)) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn castling_field(state: &GameState) -> String {
    let mut out = String::new();
    if state.can_castle(Team::Light, CastleSide::KingSide) {
        out.push('K');
    }
    if state.can_castle(Team::Light, CastleSide::QueenSide) {
        out.push('Q');
    }
    if state.can_castle(Team::Dark, CastleSide::KingSide) {
        out.push('k');
    }
    if state.can_castle(Team::Dark, CastleSide::QueenSide) {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn fen_char(cell: PieceValue) -> Option<char> {
    let base = match cell.kind() {
        PieceKind::Empty | PieceKind::EnPassantMarker => return None,
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match cell.team() {
        Team::Light => Some(base.to_ascii_uppercase()),
        Team::Dark => Some(base),
    }
}

#[cfg(test)]
mod tests {
    use super::position_fen;
    use crate::engine::execute_move::execute_move;
    use crate::errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::move_from_long_algebraic;

    #[test]
    fn opening_position_round_trips() {
        let game = GameState::new_game();
        assert_eq!(
            position_fen(&game),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn marker_squares_render_empty_but_fill_the_ep_field() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let mv = move_from_long_algebraic(&game, "e2e4")?;
        execute_move(&mut game, &mv);
        assert_eq!(
            position_fen(&game),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
        );
        Ok(())
    }

    #[test]
    fn spent_rights_disappear_from_the_field() -> Result<(), ChessErrors> {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")?;
        let mv = move_from_long_algebraic(&game, "e1g1")?;
        execute_move(&mut game, &mv);
        assert_eq!(position_fen(&game), "r3k2r/8/8/8/8/8/8/R4RK1 b kq -");
        Ok(())
    }
}
