//! Application state and logic.

use tictactoe::{Game, GameStatus};
use tracing::debug;

/// Main application state: the game plus the visual state the core
/// deliberately does not own (status text, restart affordance).
pub struct App {
    game: Game,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            status_message: "X's turn".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the restart affordance should be visible.
    pub fn game_over(&self) -> bool {
        *self.game.status() != GameStatus::InProgress
    }

    /// Forwards a cell selection into the core.
    ///
    /// A rejected move is an expected condition: it becomes an advisory
    /// message and the board stays as it was.
    pub fn select_cell(&mut self, index: usize) {
        debug!(index, "Cell selected");

        match self.game.apply_move(index) {
            Ok(status) => {
                self.status_message = match status {
                    GameStatus::InProgress => {
                        format!("{}'s turn", self.game.state().current_player())
                    }
                    GameStatus::Won(player) => format!("{player} wins!"),
                    GameStatus::Draw => "Draw".to_string(),
                };
            }
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                self.status_message = format!("{rejection}");
            }
        }
    }

    /// Restarts the game. Only honored once the game is over, matching
    /// the hidden-until-finished restart affordance.
    pub fn restart(&mut self) {
        if !self.game_over() {
            return;
        }
        debug!("Restarting game");
        self.game.reset();
        self.status_message = "X's turn".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_message() {
        let app = App::new();
        assert_eq!(app.status_message(), "X's turn");
        assert!(!app.game_over());
    }

    #[test]
    fn test_turn_message_alternates() {
        let mut app = App::new();
        app.select_cell(0);
        assert_eq!(app.status_message(), "O's turn");
        app.select_cell(4);
        assert_eq!(app.status_message(), "X's turn");
    }

    #[test]
    fn test_win_message_and_restart_gate() {
        let mut app = App::new();
        for index in [0, 4, 1, 3, 2] {
            app.select_cell(index);
        }
        assert_eq!(app.status_message(), "X wins!");
        assert!(app.game_over());

        app.restart();
        assert_eq!(app.status_message(), "X's turn");
        assert!(!app.game_over());
    }

    #[test]
    fn test_restart_ignored_mid_game() {
        let mut app = App::new();
        app.select_cell(0);
        app.restart();
        // Board untouched, still O's turn
        assert_eq!(app.status_message(), "O's turn");
        assert!(!app.game().state().board().is_empty(0));
    }

    #[test]
    fn test_rejected_move_becomes_advice() {
        let mut app = App::new();
        app.select_cell(0);
        app.select_cell(0);
        assert!(app.status_message().contains("occupied"));
    }
}
