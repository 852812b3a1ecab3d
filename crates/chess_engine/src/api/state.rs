//! Turn and selection state
//!
//! Tracks whose move it is and which square (if any) is selected along with
//! the destinations currently offered for it.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch_turn() → Black plays → switch_turn() → Move 2: White plays
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Color, Square};

/// Controller phase, derived from the selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No square selected
    Idle,
    /// A square of the side to move is selected
    Selected,
}

/// Snapshot of the controller state for rendering
///
/// `valid_moves` is non-empty only while `selected_square` is set and holds a
/// piece of `current_player`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub current_player: Color,
    pub selected_square: Option<Square>,
    pub valid_moves: Vec<Square>,
    /// Starts at 1, increments once black completes a move
    pub move_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_player: Color::White,
            selected_square: None,
            valid_moves: Vec::new(),
            move_number: 1,
        }
    }
}

impl GameState {
    pub(crate) fn with_side_to_move(current_player: Color) -> Self {
        Self {
            current_player,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.selected_square.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected_square.is_some()
    }

    /// Whether `square` is among the destinations currently offered
    pub fn offers(&self, square: Square) -> bool {
        self.valid_moves.contains(&square)
    }

    pub(crate) fn select(&mut self, square: Square, moves: Vec<Square>) {
        self.selected_square = Some(square);
        self.valid_moves = moves;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_square = None;
        self.valid_moves.clear();
    }

    /// Hand the move to the other side
    ///
    /// The move number only advances when black hands back to white.
    pub(crate) fn switch_turn(&mut self) {
        self.current_player = match self.current_player {
            Color::White => Color::Black,
            Color::Black => {
                self.move_number += 1;
                Color::White
            }
        };
    }
}
