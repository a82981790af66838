//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the game is a draw: full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    fn occupy(board: &mut Board, index: usize, player: Player) {
        board.set(index, Cell::Occupied(player)).unwrap();
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        occupy(&mut board, 4, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            occupy(&mut board, i, Player::X);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line
        let mut board = Board::new();
        for (i, player) in [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ]
        .into_iter()
        .enumerate()
        {
            occupy(&mut board, i, player);
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        occupy(&mut board, 0, Player::X);
        occupy(&mut board, 1, Player::X);
        occupy(&mut board, 2, Player::X);
        occupy(&mut board, 3, Player::O);
        occupy(&mut board, 4, Player::O);

        assert!(!is_draw(&board));
    }

    #[test]
    fn test_idempotent_on_unchanged_board() {
        let mut board = Board::new();
        occupy(&mut board, 0, Player::X);
        let first = is_draw(&board);
        assert_eq!(is_draw(&board), first);
        assert_eq!(is_draw(&board), first);
    }
}
