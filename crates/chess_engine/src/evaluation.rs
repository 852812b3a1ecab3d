//! Game-over evaluation
//!
//! The terminal condition here is simply "a king has been captured". There is
//! no check, checkmate or stalemate detection in the chess-theoretic sense.
//!
//! # Result Precedence
//!
//! White's king is looked for first. A board with no white king reports
//! `Won(Black)` even when the black king is missing too. Both kings absent
//! cannot arise from play (only from direct board edits), so that case is
//! logged as a warning and keeps the white-first precedence.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Board;
use crate::constants::{B_KING, W_KING};
use crate::types::Color;

/// Result of scanning the board for both kings
///
/// # State Transitions
///
/// ```text
/// Ongoing → Won(White) / Won(Black)
/// ```
///
/// The controller does not refuse further moves once a side has won; halting
/// input is up to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Both kings are on the board
    #[default]
    Ongoing,

    /// The other side's king is gone
    Won(Color),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Winning side, `None` while the game is ongoing
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Won(color) => Some(*color),
        }
    }

    /// Message for the presentation layer, empty while ongoing
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::Ongoing => "",
            GameStatus::Won(Color::White) => "Checkmate! White wins!",
            GameStatus::Won(Color::Black) => "Checkmate! Black wins!",
        }
    }
}

/// Scan every square for both kings
pub fn evaluate(board: &Board) -> GameStatus {
    let mut white_king = false;
    let mut black_king = false;

    for (_, piece) in board.pieces() {
        if piece == W_KING {
            white_king = true;
        } else if piece == B_KING {
            black_king = true;
        }
    }

    match (white_king, black_king) {
        (true, true) => GameStatus::Ongoing,
        (false, true) => GameStatus::Won(Color::Black),
        (true, false) => GameStatus::Won(Color::White),
        (false, false) => {
            warn!("[GAME_OVER] Both kings are missing; reporting Black as winner");
            GameStatus::Won(Color::Black)
        }
    }
}
