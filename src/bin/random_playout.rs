//! Random self-play driver.
//!
//! Plays a game of uniformly random legal moves against itself, printing
//! each move and the final position. Doubles as a smoke test: every
//! enumerated move must commit, and the game must end only by checkmate,
//! stalemate, or the ply cap.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- 500`

use rand::prelude::IndexedRandom;

use snail_chess::board::piece_value::Team;
use snail_chess::board::square::Square;
use snail_chess::chess_move::ChessMove;
use snail_chess::engine::execute_move::execute_move;
use snail_chess::engine::legal_moves::legal_moves;
use snail_chess::game_state::game_state::GameState;
use snail_chess::utils::fen_generator::position_fen;
use snail_chess::utils::long_algebraic::move_to_long_algebraic;
use snail_chess::utils::render_game_state::{render_capture_zone, render_game_state};

const DEFAULT_PLY_CAP: u32 = 200;

fn main() {
    let ply_cap: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_PLY_CAP);

    let started = chrono::Local::now();
    println!(
        "random playout started {} (ply cap {ply_cap})",
        started.format("%Y-%m-%d %H:%M:%S")
    );

    let mut game = GameState::new_game();
    let mut rng = rand::rng();
    let mut plies_played = 0u32;

    for ply in 1..=ply_cap {
        let mover = game.turn();
        let candidates: Vec<ChessMove> = Square::all()
            .flat_map(|square| legal_moves(square, &game))
            .collect();

        let Some(picked) = candidates.as_slice().choose(&mut rng) else {
            // Unreachable while status flags are maintained: a side with
            // no moves was flagged mate or stalemate by the previous commit.
            println!("no legal moves for {mover:?} at ply {ply} without a game-over flag");
            break;
        };

        let outcome = execute_move(&mut game, picked);
        assert!(
            outcome.is_accepted(),
            "enumerated move {} was rejected with {:?}",
            move_to_long_algebraic(picked),
            outcome
        );
        plies_played = ply;

        println!(
            "{ply:>3} {mover:?} {} {outcome:?}",
            move_to_long_algebraic(picked)
        );
        if game.is_over() {
            break;
        }
    }

    println!("{}", render_game_state(&game));
    println!("captured by Light: {}", render_capture_zone(&game, Team::Light));
    println!("captured by Dark:  {}", render_capture_zone(&game, Team::Dark));
    println!("final position: {}", position_fen(&game));

    let verdict = if game.is_checkmate() {
        format!("checkmate, {:?} has no reply", game.turn())
    } else if game.is_stalemate() {
        format!("stalemate, {:?} has no reply", game.turn())
    } else {
        format!("ply cap reached after {plies_played} plies")
    };
    let elapsed = chrono::Local::now() - started;
    println!("{verdict} ({} ms)", elapsed.num_milliseconds());
}
