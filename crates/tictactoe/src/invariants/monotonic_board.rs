//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::types::{Board, Cell, GameState};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied, it never changes
/// until reset. Verified by replaying the move history and comparing
/// against the live board.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            let index = mov.position().to_index();

            // Cell must be empty before placing
            if !reconstructed.is_empty(index) {
                return false;
            }
            if reconstructed
                .set(index, Cell::Occupied(mov.player()))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new();
        assert!(MonotonicBoard::holds(&state));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = Game::new();
        game.apply_move(4).unwrap();
        assert!(MonotonicBoard::holds(game.state()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = Game::new();
        for index in [0, 4, 2, 6] {
            game.apply_move(index).unwrap();
        }
        assert!(MonotonicBoard::holds(game.state()));
    }

    #[test]
    fn test_rejected_move_does_not_disturb() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();
        let _ = game.apply_move(0);
        assert!(MonotonicBoard::holds(game.state()));
    }
}
