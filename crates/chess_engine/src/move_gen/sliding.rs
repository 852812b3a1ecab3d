//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector, walk outward one square at a time:
//! 1. Stop at the board edge
//! 2. Offer every empty square and keep walking
//! 3. On the first occupied square, offer it only if it holds an opponent
//!    piece (capture), then stop this direction either way
//!
//! A generated ray therefore never skips an occupied square: it ends at the
//! first blocker, inclusive when capturable, exclusive otherwise.
//!
//! ## Direction Sets
//!
//! - **Rook**: 4 orthogonal
//! - **Bishop**: 4 diagonal
//! - **Queen**: both, 8 total

use crate::board::Board;
use crate::types::*;

/// Generate moves for a sliding piece along each direction in `directions`
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(target) = current.offset(dr, dc) {
            match board.color_at(target) {
                None => moves.push(target),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }
}
