//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// The 8 win lines, scanned in a fixed order: rows, columns, diagonals.
///
/// A legal board has at most one winner, so scan order cannot change the
/// result, but it is fixed for deterministic behavior under test.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c) {
            if let Some(Cell::Occupied(player)) = cell {
                return Some(player);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.set(i, Cell::Occupied(Player::X)).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for i in [1, 4, 7] {
            board.set(i, Cell::Occupied(Player::O)).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for i in [0, 4, 8] {
            board.set(i, Cell::Occupied(Player::O)).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for i in [2, 4, 6] {
            board.set(i, Cell::Occupied(Player::X)).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Player::X)).unwrap();
        board.set(1, Cell::Occupied(Player::X)).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Player::X)).unwrap();
        board.set(1, Cell::Occupied(Player::O)).unwrap();
        board.set(2, Cell::Occupied(Player::X)).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_idempotent_on_unchanged_board() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.set(i, Cell::Occupied(Player::X)).unwrap();
        }
        let first = check_winner(&board);
        assert_eq!(check_winner(&board), first);
        assert_eq!(check_winner(&board), first);
    }
}
