//! Stepping piece move generation
//!
//! Knights and kings move to a fixed set of offset squares. Nothing in
//! between matters (a knight jumps, a king only moves one square), so each
//! candidate is judged on its own:
//!
//! - Off the board: skipped
//! - Empty: offered
//! - Opponent piece: offered (capture)
//! - Own piece: skipped
//!
//! The king gets no castling and no check-safety filtering. It may be offered
//! a square the opponent attacks.

use crate::board::Board;
use crate::types::*;

/// Generate moves for a stepping piece from its offset table
pub fn generate_stepping_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        let Some(target) = from.offset(dr, dc) else {
            continue;
        };
        if board.color_at(target) != Some(color) {
            moves.push(target);
        }
    }
}
