//! Move-path counting for rules verification.
//!
//! `perft(n)` counts the leaf positions of the full legal-move tree to
//! depth `n`. The counts for well-known positions are published, so any
//! rules drift shows up as an exact numeric mismatch. Promotion fan-out is
//! not enumerated (a move names no promotion piece), so reference counts
//! only hold at promotion-free depths.

use crate::board::square::Square;
use crate::engine::execute_move::{apply_accepted, trial_promotion};
use crate::engine::legal_moves::legal_moves;
use crate::game_state::game_state::GameState;
use crate::rules::piece_rules;
use crate::rules::side_effects::RuleVerdict;

/// Counts legal move paths of length `depth` from `state`.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for src in Square::all() {
        for mv in legal_moves(src, state) {
            if depth == 1 {
                nodes += 1;
                continue;
            }
            // Enumerated moves are rule-legal by construction.
            let RuleVerdict::Legal(effects) = piece_rules::validate(&mv, state) else {
                continue;
            };
            let mut child = state.clone();
            apply_accepted(&mut child, &mv, &effects, trial_promotion(&mv));
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::errors::ChessErrors;
    use crate::game_state::game_state::GameState;

    #[test]
    fn opening_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        assert_eq!(perft(&game, 3), 8_902);
    }

    #[test]
    #[ignore = "minutes of brute-force threat scans; run with --ignored"]
    fn opening_position_depth_four() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 4), 197_281);
    }

    #[test]
    fn kiwipete_counts() -> Result<(), ChessErrors> {
        let game =
            GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0")?;
        assert_eq!(perft(&game, 1), 48);
        assert_eq!(perft(&game, 2), 2_039);
        Ok(())
    }

    #[test]
    fn rook_endgame_counts() -> Result<(), ChessErrors> {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")?;
        assert_eq!(perft(&game, 1), 14);
        assert_eq!(perft(&game, 2), 191);
        assert_eq!(perft(&game, 3), 2_812);
        Ok(())
    }
}
