//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single and double forward pushes
//! - Diagonal captures
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, only onto an empty square
//! - **Double push**: only from the starting row (row 6 for white, row 1 for
//!   black), and only when both the single-step and double-step squares are empty
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//!
//! There is no en passant and no promotion. A pawn that reaches the last row
//! stays a pawn and simply has no forward moves left.

use crate::board::Board;
use crate::constants::PAWN_CAPTURE_COLS;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// Destinations are appended in the order single push, double push, capture
/// toward `col - 1`, capture toward `col + 1`.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Board::standard(), Square::new(6, 4)?, Color::White, &mut moves);
/// // moves == [(5, 4), (4, 4)]
/// ```
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let forward = color.forward();

    // The single-step square gates the double step
    if let Some(single) = from.offset(forward, 0) {
        if board.is_empty(single) {
            moves.push(single);

            if from.row() == color.pawn_start_row() {
                if let Some(double) = from.offset(2 * forward, 0) {
                    // Double step requires both squares empty
                    if board.is_empty(single) && board.is_empty(double) {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for dc in PAWN_CAPTURE_COLS {
        let Some(target) = from.offset(forward, dc) else {
            continue;
        };
        if board.color_at(target) == Some(color.opponent()) {
            moves.push(target);
        }
    }
}
