//! Move application and selection outcomes

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::evaluation::GameStatus;
use crate::types::{PieceIdentity, Square};

/// A move that was applied to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceIdentity,
    pub captured: Option<PieceIdentity>,
}

/// What a call to [`crate::api::ChessGame::select`] did
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectOutcome {
    /// Idle → Selected on a piece of the side to move
    Selected { square: Square, moves: Vec<Square> },

    /// Selected → Selected on another (or the same) piece of the side to move
    Reselected { square: Square, moves: Vec<Square> },

    /// An offered destination was chosen; the turn passed to the other side
    Moved {
        record: MoveRecord,
        status: GameStatus,
    },

    /// Selected → Idle on a square that was neither offered nor selectable
    Deselected,

    /// Idle stays Idle (empty square or opponent piece)
    Ignored,
}

impl SelectOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, SelectOutcome::Moved { .. })
    }
}

/// Move whatever stands on `from` to `to`, replacing any occupant
///
/// Returns `None` (and leaves the board untouched) when `from` is empty.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Option<MoveRecord> {
    let piece = board.take(from)?;
    let captured = board.take(to);
    board.place(to, Some(piece));
    Some(MoveRecord {
        from,
        to,
        piece,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_apply_move_quiet() {
        let mut board = Board::standard();
        let record = apply_move(&mut board, sq(6, 4), sq(4, 4)).expect("pawn is there");

        assert_eq!(record.piece, W_PAWN);
        assert_eq!(record.captured, None);
        assert!(board.is_empty(sq(6, 4)));
        assert_eq!(board.at(sq(4, 4)), Some(W_PAWN));
        assert_eq!(board.count(), 32);
    }

    #[test]
    fn test_apply_move_capture() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Some(W_ROOK));
        board.place(sq(0, 3), Some(B_KING));

        let record = apply_move(&mut board, sq(3, 3), sq(0, 3)).expect("rook is there");

        assert_eq!(record.captured, Some(B_KING));
        assert_eq!(board.at(sq(0, 3)), Some(W_ROOK));
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn test_apply_move_from_empty_square() {
        let mut board = Board::standard();
        assert_eq!(apply_move(&mut board, sq(4, 4), sq(3, 4)), None);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let moved = SelectOutcome::Moved {
            record: MoveRecord {
                from: sq(6, 4),
                to: sq(4, 4),
                piece: W_PAWN,
                captured: None,
            },
            status: GameStatus::Ongoing,
        };

        let value = serde_json::to_value(&moved).unwrap();
        assert_eq!(value["outcome"], "moved");
        assert_eq!(value["record"]["from"], serde_json::json!([6, 4]));
        assert_eq!(value["record"]["piece"], 1);
        assert_eq!(value["status"], "ongoing");
        assert_eq!(serde_json::from_value::<SelectOutcome>(value).unwrap(), moved);

        let ignored = serde_json::to_value(SelectOutcome::Ignored).unwrap();
        assert_eq!(ignored, serde_json::json!({ "outcome": "ignored" }));
    }
}
