//! Board representation
//!
//! An 8x8 grid of optional piece identities. The board is a raw mutable grid:
//! it enforces one piece per square and nothing else (no piece counts, no
//! king uniqueness, no turn legality). Rules live in `move_gen` and the
//! controller in `api`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ChessEngineResult;
use crate::types::*;

const SIZE: usize = BOARD_SIZE as usize;

/// The authoritative position
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<PieceIdentity>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        Board {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// The standard starting position
    pub fn standard() -> Self {
        let mut board = Board::empty();
        board.reset_to_standard_setup();
        board
    }

    /// Occupant of a square
    #[inline]
    pub fn at(&self, square: Square) -> Option<PieceIdentity> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Occupant at raw coordinates, failing with `OutOfBounds` off the grid
    pub fn get(&self, row: u8, col: u8) -> ChessEngineResult<Option<PieceIdentity>> {
        Ok(self.at(Square::new(row, col)?))
    }

    /// Unconditional overwrite, no legality check
    #[inline]
    pub fn place(&mut self, square: Square, piece: Option<PieceIdentity>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Remove and return the occupant of a square
    pub fn take(&mut self, square: Square) -> Option<PieceIdentity> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// Color of the occupant, `None` for an empty square
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.at(square).map(PieceIdentity::color)
    }

    pub fn clear(&mut self) {
        self.squares = [[None; SIZE]; SIZE];
    }

    /// Pawns on rows 1 and 6, back ranks on rows 0 and 7, everything else empty
    pub fn reset_to_standard_setup(&mut self) {
        self.clear();
        for color in [Color::White, Color::Black] {
            let back_rank = color.back_rank();
            let pawn_row = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                self.place(
                    Square::new_unchecked(back_rank, col),
                    Some(PieceIdentity::new(color, *kind)),
                );
                self.place(
                    Square::new_unchecked(pawn_row, col),
                    Some(PieceIdentity::new(color, PieceKind::Pawn)),
                );
            }
        }
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceIdentity)> + '_ {
        Square::all().filter_map(move |square| self.at(square).map(|piece| (square, piece)))
    }

    /// First square (row-major) holding `piece`
    pub fn find(&self, piece: PieceIdentity) -> Option<Square> {
        self.pieces()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(square, _)| square)
    }

    pub fn count(&self) -> usize {
        self.pieces().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessEngineError;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_standard_setup_layout() {
        //! Back ranks, pawn rows and the empty middle match the starting position
        let board = Board::standard();

        assert_eq!(board.count(), 32);
        assert_eq!(board.at(sq(0, 0)), Some(B_ROOK));
        assert_eq!(board.at(sq(0, 3)), Some(B_QUEEN));
        assert_eq!(board.at(sq(0, 4)), Some(B_KING));
        assert_eq!(board.at(sq(7, 1)), Some(W_KNIGHT));
        assert_eq!(board.at(sq(7, 3)), Some(W_QUEEN));
        assert_eq!(board.at(sq(7, 4)), Some(W_KING));
        assert_eq!(board.at(sq(7, 5)), Some(W_BISHOP));

        for col in 0..8 {
            assert_eq!(board.at(sq(1, col)), Some(B_PAWN));
            assert_eq!(board.at(sq(6, col)), Some(W_PAWN));
            for row in 2..6 {
                assert!(
                    board.is_empty(sq(row, col)),
                    "({}, {}) should be empty",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_reset_replaces_edited_position() {
        let mut board = Board::standard();
        board.place(sq(4, 4), Some(W_QUEEN));
        board.place(sq(0, 4), None);

        board.reset_to_standard_setup();

        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_place_and_take() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Some(B_KNIGHT));
        assert_eq!(board.color_at(sq(3, 3)), Some(Color::Black));

        board.place(sq(3, 3), Some(W_ROOK));
        assert_eq!(board.at(sq(3, 3)), Some(W_ROOK), "place overwrites");

        assert_eq!(board.take(sq(3, 3)), Some(W_ROOK));
        assert!(board.is_empty(sq(3, 3)));
        assert_eq!(board.take(sq(3, 3)), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::standard();
        assert_eq!(board.get(0, 4), Ok(Some(B_KING)));
        assert_eq!(
            board.get(8, 4),
            Err(ChessEngineError::OutOfBounds { row: 8, col: 4 })
        );
    }

    #[test]
    fn test_find_king() {
        let board = Board::standard();
        assert_eq!(board.find(W_KING), Some(sq(7, 4)));
        assert_eq!(board.find(B_KING), Some(sq(0, 4)));
        assert_eq!(Board::empty().find(W_KING), None);
    }

    #[test]
    fn test_board_json_keeps_every_square() {
        let mut board = Board::standard();
        board.take(sq(6, 4));
        board.place(sq(4, 4), Some(W_PAWN));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert!(restored.is_empty(sq(6, 4)));
    }
}
