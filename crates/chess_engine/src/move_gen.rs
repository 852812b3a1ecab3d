//! Move generation
//!
//! Computes pseudo-legal destinations for the piece on a square. The piece
//! kind is matched once and dispatched into one of three algorithms:
//!
//! - `sliding` - rook, bishop, queen (directional scanning with blocking)
//! - `stepping` - knight, king (fixed offset tables)
//! - `pawn` - forward pushes, double step, diagonal captures
//!
//! "Pseudo-legal" means the movement pattern and blocking/capture rules are
//! honoured, but nothing checks whether the mover's own king is left
//! capturable.

mod pawn;
mod sliding;
mod stepping;


pub use pawn::generate_pawn_moves;
pub use sliding::generate_sliding_moves;
pub use stepping::generate_stepping_moves;

use crate::board::Board;
use crate::constants::*;
use crate::error::ChessEngineResult;
use crate::types::*;

/// Destinations for the piece on `from` when `side_to_move` is to play
///
/// An empty square or a piece of the other color yields an empty list. That
/// is the normal "nothing selectable here" answer, not an error.
pub fn moves_for(board: &Board, from: Square, side_to_move: Color) -> Vec<Square> {
    let Some(piece) = board.at(from) else {
        return Vec::new();
    };
    if piece.color() != side_to_move {
        return Vec::new();
    }

    let color = piece.color();
    let mut moves = Vec::with_capacity(MAX_PIECE_MOVES);
    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, &mut moves),
        PieceKind::Knight => {
            generate_stepping_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves)
        }
        PieceKind::King => generate_stepping_moves(board, from, color, &KING_OFFSETS, &mut moves),
        PieceKind::Bishop => generate_sliding_moves(board, from, color, &BISHOP_DIRS, &mut moves),
        PieceKind::Rook => generate_sliding_moves(board, from, color, &ROOK_DIRS, &mut moves),
        PieceKind::Queen => generate_sliding_moves(board, from, color, &QUEEN_DIRS, &mut moves),
    }
    moves
}

/// [`moves_for`] on raw coordinates, failing with `OutOfBounds` off the grid
pub fn moves_for_coords(
    board: &Board,
    row: u8,
    col: u8,
    side_to_move: Color,
) -> ChessEngineResult<Vec<Square>> {
    let from = Square::new(row, col)?;
    Ok(moves_for(board, from, side_to_move))
}

/// Every `(from, to)` pair available to `color`, origins in row-major order
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut moves = Vec::with_capacity(64);

    for (from, piece) in board.pieces() {
        if piece.color() != color {
            continue;
        }
        moves.extend(moves_for(board, from, color).into_iter().map(|to| (from, to)));
    }

    moves
}
