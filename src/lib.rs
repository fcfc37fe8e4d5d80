//! Crate root module declarations for the Snail Chess rules engine.
//!
//! This file exposes all top-level subsystems (board storage, game state,
//! piece movement rules, the move engine, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod errors;

pub mod chess_move;

pub mod board {
    pub mod grid;
    pub mod piece_value;
    pub mod square;
}

pub mod game_state {
    pub mod capture_zone;
    pub mod game_state;
    pub mod move_outcome;
    pub mod promotion;
}

pub mod rules {
    pub mod castling;
    pub mod piece_rules;
    pub mod side_effects;
    pub mod threat;
}

pub mod engine {
    pub mod execute_move;
    pub mod legal_moves;
    pub mod perft;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
