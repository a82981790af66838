//! First-class move types and the move rejection error.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Rejection of a move request.
///
/// This is the only error the core produces. It is an expected,
/// recoverable condition: the rejected call leaves the game state
/// untouched, and the presentation layer surfaces it as advice
/// rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is outside the board (must be 0-8).
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}
