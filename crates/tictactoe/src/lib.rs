//! Pure two-player tic-tac-toe game logic.
//!
//! The [`Game`] engine owns a single [`GameState`] (3x3 board, current
//! player, status) and exposes a synchronous request/response surface to
//! a presentation layer:
//!
//! - [`Game::apply_move`] - place the current player's mark at an index
//! - [`Game::status`] - observe the outcome state
//! - [`Game::reset`] - return to a fresh game
//! - [`rules::check_winner`] - pure win evaluation over a board
//!
//! Illegal requests (occupied cell, out-of-range index, game already
//! over) are rejected with [`InvalidMove`] and leave the state untouched;
//! the caller decides how to surface the advice.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(*game.status(), GameStatus::Won(Player::X));
//!
//! game.reset();
//! assert_eq!(*game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use game::Game;
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Player};
