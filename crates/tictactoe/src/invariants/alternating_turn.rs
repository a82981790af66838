//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, GameStatus, Player};

/// Invariant: players alternate turns, X first.
///
/// The history implies a strict X, O, X, O, ... order. While the game is
/// in progress, `current_player` must agree with the history length; once
/// won, `current_player` stays on the winner (the turn never toggles past
/// the winning move).
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        // First move is always X
        if let Some(first) = history.first() {
            if first.player() != Player::X {
                return false;
            }
        }

        // Strict alternation
        for window in history.windows(2) {
            if window[0].player() == window[1].player() {
                return false;
            }
        }

        let moves = history.len();
        let next_up = if moves % 2 == 0 { Player::X } else { Player::O };

        match state.status() {
            GameStatus::InProgress => state.current_player() == next_up,
            GameStatus::Won(winner) => moves > 0 && state.current_player() == *winner,
            GameStatus::Draw => moves == 9,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
