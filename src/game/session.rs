//! Hot-seat session
//!
//! Both players share one input stream. Each line is parsed into a
//! [`Command`] and a [`Reply`] comes back with the text to print and whether
//! to keep reading.

use chess_engine::{ChessGame, SelectOutcome, Square};
use tracing::{debug, info, warn};

use crate::core::GameSettings;
use crate::input::{parse_command, Command, HELP_TEXT};
use crate::rendering::{render_view, RenderOptions};

/// Whether the input loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub control: SessionControl,
    pub output: String,
}

impl Reply {
    fn show(output: String) -> Self {
        Self {
            control: SessionControl::Continue,
            output,
        }
    }

    fn quit() -> Self {
        Self {
            control: SessionControl::Quit,
            output: String::new(),
        }
    }
}

/// One game plus how to draw it
#[derive(Debug, Clone)]
pub struct Session {
    game: ChessGame,
    options: RenderOptions,
}

impl Session {
    pub fn new(settings: &GameSettings) -> Self {
        Self::with_game(ChessGame::new(), settings)
    }

    /// Resume from an existing game, e.g. a custom position
    pub fn with_game(game: ChessGame, settings: &GameSettings) -> Self {
        Self {
            game,
            options: RenderOptions::from(settings),
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    /// The current screen
    pub fn render(&self) -> String {
        render_view(&self.game, self.options)
    }

    /// Parse and apply one input line
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(None) => Reply::show(String::new()),
            Ok(Some(command)) => self.handle_command(command),
            Err(e) => {
                debug!("[INPUT] Rejected line {:?}: {}", line.trim(), e);
                Reply::show(format!("{}\nType `help` for the list of commands.\n", e))
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Select(square) => self.click(square),
            Command::Reset => {
                self.game.reset();
                Reply::show(self.render())
            }
            Command::Help => Reply::show(format!("{}\n", HELP_TEXT)),
            Command::Quit => {
                info!("[SESSION] Quit requested");
                Reply::quit()
            }
        }
    }

    fn click(&mut self, square: Square) -> Reply {
        let status = self.game.status();
        if status.is_over() {
            warn!("[INPUT] Ignoring click on {}: game is over", square);
            return Reply::show(format!(
                "{}\nType `reset` to play again.\n",
                status.message()
            ));
        }

        let outcome = self.game.select(square);
        let mut output = self.render();
        match outcome {
            SelectOutcome::Ignored => {
                output.push_str(&format!(
                    "Nothing to select at {}; pick a {} piece.\n",
                    square,
                    self.game.current_player()
                ));
            }
            SelectOutcome::Selected { ref moves, .. } | SelectOutcome::Reselected { ref moves, .. }
                if moves.is_empty() =>
            {
                output.push_str("That piece has no moves.\n");
            }
            _ => {}
        }
        Reply::show(output)
    }
}
