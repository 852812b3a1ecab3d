//! Game controller
//!
//! [`ChessGame`] owns the board and the turn/selection state and is the sole
//! entry point a presentation layer calls. A click on a square becomes one
//! [`ChessGame::select`] call.
//!
//! # State Machine
//!
//! ```text
//! Idle     --own piece-->          Selected
//! Idle     --anything else-->      Idle
//! Selected --offered square-->     Idle      (move applied, turn switched)
//! Selected --own piece-->          Selected  (reselection)
//! Selected --anything else-->      Idle      (deselect)
//! ```
//!
//! There is no terminal state. After a king is captured the controller keeps
//! accepting input; stopping play is the caller's decision.

use tracing::{debug, info, warn};

use super::moves::{apply_move, MoveRecord, SelectOutcome};
use super::state::GameState;
use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::evaluation::{evaluate, GameStatus};
use crate::move_gen::moves_for;
use crate::types::{Color, Square};

/// Create a new game with the standard starting position
pub fn new_game() -> ChessGame {
    ChessGame::new()
}

/// One game: the position plus whose move it is and what is selected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    state: GameState,
    last_move: Option<MoveRecord>,
}

impl Default for ChessGame {
    fn default() -> Self {
        ChessGame::new()
    }
}

impl ChessGame {
    /// Standard starting position, white to move, nothing selected
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            state: GameState::with_side_to_move(side_to_move),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    /// Most recently applied move, `None` before the first move and after a reset
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// King-presence check against the current board
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Raw access for direct board edits
    ///
    /// Clears the current selection, since offered moves computed for the old
    /// position no longer apply.
    pub fn board_mut(&mut self) -> &mut Board {
        self.state.clear_selection();
        &mut self.board
    }

    /// Back to the standard starting position
    pub fn reset(&mut self) {
        *self = ChessGame::new();
        info!("[GAME_INIT] Game reset to starting position");
    }

    /// [`ChessGame::select`] on raw coordinates, failing with `OutOfBounds` off the grid
    pub fn select_at(&mut self, row: u8, col: u8) -> ChessEngineResult<SelectOutcome> {
        let square = Square::new(row, col)?;
        Ok(self.select(square))
    }

    /// Drive the select state machine with a click on `square`
    pub fn select(&mut self, square: Square) -> SelectOutcome {
        if let Some(from) = self.state.selected_square {
            if self.state.offers(square) {
                return self.play(from, square);
            }
        }

        let side = self.state.current_player;
        if self.board.color_at(square) == Some(side) {
            let moves = moves_for(&self.board, square, side);
            let reselect = self.state.is_selected();
            self.state.select(square, moves.clone());
            debug!(
                "[SELECT] {} selected {} with {} move(s)",
                side,
                square,
                moves.len()
            );
            return if reselect {
                SelectOutcome::Reselected { square, moves }
            } else {
                SelectOutcome::Selected { square, moves }
            };
        }

        if self.state.is_selected() {
            self.state.clear_selection();
            debug!("[SELECT] Selection cleared by click on {}", square);
            SelectOutcome::Deselected
        } else {
            SelectOutcome::Ignored
        }
    }

    fn play(&mut self, from: Square, to: Square) -> SelectOutcome {
        let Some(record) = apply_move(&mut self.board, from, to) else {
            warn!(
                "[MOVE] Selected square {} is empty; dropping selection",
                from
            );
            self.state.clear_selection();
            return SelectOutcome::Deselected;
        };

        self.state.switch_turn();
        self.state.clear_selection();
        self.last_move = Some(record);

        match record.captured {
            Some(captured) => info!(
                "[MOVE] {} {} {} -> {} captures {}",
                record.piece.color(),
                record.piece.kind().name(),
                from,
                to,
                captured.kind().name()
            ),
            None => info!(
                "[MOVE] {} {} {} -> {}",
                record.piece.color(),
                record.piece.kind().name(),
                from,
                to
            ),
        }

        let status = self.status();
        if let Some(winner) = status.winner() {
            info!("[GAME_OVER] {} wins: king captured", winner);
        }

        SelectOutcome::Moved { record, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Phase;
    use crate::constants::*;
    use crate::error::ChessEngineError;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = new_game();
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.state().phase(), Phase::Idle);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_idle_click_on_empty_or_enemy_is_ignored() {
        let mut game = new_game();
        assert_eq!(game.select(sq(4, 4)), SelectOutcome::Ignored);
        assert_eq!(game.select(sq(1, 0)), SelectOutcome::Ignored);
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn test_select_own_piece_without_moves() {
        //! A piece with no moves is still selected, with an empty move list
        let mut game = new_game();
        let outcome = game.select(sq(7, 0));
        assert_eq!(
            outcome,
            SelectOutcome::Selected {
                square: sq(7, 0),
                moves: Vec::new()
            }
        );
        assert_eq!(game.state().selected_square, Some(sq(7, 0)));
        assert!(game.state().valid_moves.is_empty());
    }

    #[test]
    fn test_reselect_and_deselect() {
        let mut game = new_game();
        game.select(sq(6, 4));

        let outcome = game.select(sq(7, 6));
        assert_eq!(
            outcome,
            SelectOutcome::Reselected {
                square: sq(7, 6),
                moves: vec![sq(5, 5), sq(5, 7)]
            }
        );

        assert_eq!(game.select(sq(3, 3)), SelectOutcome::Deselected);
        assert_eq!(game.state().phase(), Phase::Idle);
        assert!(game.state().valid_moves.is_empty());
    }

    #[test]
    fn test_clicking_selected_piece_again_reselects() {
        let mut game = new_game();
        game.select(sq(6, 0));
        assert!(matches!(
            game.select(sq(6, 0)),
            SelectOutcome::Reselected { .. }
        ));
        assert_eq!(game.state().selected_square, Some(sq(6, 0)));
    }

    #[test]
    fn test_move_switches_turn_and_clears_selection() {
        let mut game = new_game();
        game.select(sq(6, 4));
        let outcome = game.select(sq(4, 4));

        let expected = MoveRecord {
            from: sq(6, 4),
            to: sq(4, 4),
            piece: W_PAWN,
            captured: None,
        };
        assert_eq!(
            outcome,
            SelectOutcome::Moved {
                record: expected,
                status: GameStatus::Ongoing
            }
        );
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.state().phase(), Phase::Idle);
        assert!(game.board().is_empty(sq(6, 4)));
        assert_eq!(game.board().at(sq(4, 4)), Some(W_PAWN));
        assert_eq!(game.last_move(), Some(expected));
    }

    #[test]
    fn test_select_at_out_of_bounds() {
        let mut game = new_game();
        assert_eq!(
            game.select_at(9, 0),
            Err(ChessEngineError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn test_board_mut_clears_selection() {
        let mut game = new_game();
        game.select(sq(6, 4));
        game.board_mut().place(sq(5, 4), Some(B_PAWN));

        assert_eq!(game.state().phase(), Phase::Idle);
        assert_eq!(game.select(sq(5, 4)), SelectOutcome::Ignored);
    }

    #[test]
    fn test_reset_restores_new_game() {
        let mut game = new_game();
        game.select(sq(6, 4));
        game.select(sq(4, 4));
        game.select(sq(1, 3));

        game.reset();

        assert_eq!(game, new_game());
    }
}
