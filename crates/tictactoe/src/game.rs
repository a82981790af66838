//! Game engine: the turn state machine over a single owned state.

use super::action::InvalidMove;
use super::position::Position;
use super::rules;
use super::types::{GameState, GameStatus};
use tracing::instrument;

/// Tic-tac-toe game engine.
///
/// Owns one [`GameState`] and mediates all mutation through
/// [`apply_move`](Game::apply_move) and [`reset`](Game::reset), so there is
/// no shared mutable state anywhere in the program. The status only moves
/// forward: `InProgress` to `Won` or `Draw`, and back to `InProgress` only
/// through `reset`.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Applies the current player's move at the given board index (0-8).
    ///
    /// On success the mark is placed, the status re-evaluated, and the
    /// resulting status returned: a completed line ends the game as
    /// [`GameStatus::Won`], a full board with no line as
    /// [`GameStatus::Draw`], and otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching the state when the index is
    /// out of range, the cell is occupied, or the game is already over.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        if *self.state.status() != GameStatus::InProgress {
            return Err(InvalidMove::GameOver);
        }

        let position = Position::from_index(index).ok_or(InvalidMove::OutOfBounds(index))?;

        if !self.state.board().is_empty(index) {
            return Err(InvalidMove::Occupied(position));
        }

        let player = self.state.current_player();
        self.state.place(position, player);

        if rules::check_winner(self.state.board()) == Some(player) {
            self.state.set_status(GameStatus::Won(player));
        } else if self.state.board().is_full() {
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.next_turn();
        }

        Ok(*self.state.status())
    }

    /// Reinitializes the game: board all-empty, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
