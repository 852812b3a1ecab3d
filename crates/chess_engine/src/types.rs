//! # Core Types - Colors, Kinds, Identities and Squares
//!
//! ## Piece Identity Encoding
//!
//! A piece identity is a **signed 8-bit code**:
//! - Positive values (1-6) are white pieces
//! - Negative values (-1 to -6) are black pieces
//! - The absolute value is the kind (1=pawn, 2=knight, 3=bishop, 4=rook, 5=queen, 6=king)
//!
//! Zero is never a valid identity. Empty squares are `None` at the board level,
//! so an identity always names exactly one of the twelve (color, kind) pairs and
//! equality is a single byte comparison.
//!
//! The only way to turn a raw code into an identity is [`PieceIdentity::try_from`],
//! which rejects anything outside the twelve valid codes. Every other
//! constructor goes through [`PieceIdentity::new`], so `color()` and `kind()`
//! are total.
//!
//! ## Board Orientation
//!
//! Row 0 is black's back rank and row 7 is white's. White pawns advance toward
//! row 0, black pawns toward row 7. There is no coordinate flipping anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns start on (the only row a double step is offered from)
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six piece kinds, numbered by their identity magnitude
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Map an identity magnitude back to a kind
    pub fn from_id(id: u8) -> ChessEngineResult<Self> {
        match id {
            1 => Ok(PieceKind::Pawn),
            2 => Ok(PieceKind::Knight),
            3 => Ok(PieceKind::Bishop),
            4 => Ok(PieceKind::Rook),
            5 => Ok(PieceKind::Queen),
            6 => Ok(PieceKind::King),
            _ => Err(ChessEngineError::UnknownKind { id }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// One of the twelve (color, kind) pairs
///
/// Serializes as its signed code so board snapshots stay compact on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct PieceIdentity(i8);

impl PieceIdentity {
    /// Identity for a (color, kind) pair
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let id = kind as i8;
        match color {
            Color::White => PieceIdentity(id),
            Color::Black => PieceIdentity(-id),
        }
    }

    /// Signed code (sign = color, magnitude = kind)
    pub const fn code(self) -> i8 {
        self.0
    }

    pub const fn color(self) -> Color {
        if self.0 > 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self.0.unsigned_abs() {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => panic!("piece identity codes are validated on construction"),
        }
    }

    pub const fn is(self, color: Color, kind: PieceKind) -> bool {
        self.0 == PieceIdentity::new(color, kind).0
    }
}

impl TryFrom<i8> for PieceIdentity {
    type Error = ChessEngineError;

    fn try_from(code: i8) -> ChessEngineResult<Self> {
        if code == 0 || code.unsigned_abs() > PieceKind::King.id() {
            return Err(ChessEngineError::InvalidIdentity { code });
        }
        Ok(PieceIdentity(code))
    }
}

impl From<PieceIdentity> for i8 {
    fn from(piece: PieceIdentity) -> i8 {
        piece.0
    }
}

/// A board square, always on the grid
///
/// Construct with [`Square::new`]; stepping with [`Square::offset`] clips at
/// the edge instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> ChessEngineResult<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ChessEngineError::OutOfBounds { row, col });
        }
        Ok(Square { row, col })
    }

    /// Caller guarantees both coordinates are below `BOARD_SIZE`
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by `(dr, dc)`, or `None` if the result leaves the grid
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        let size = i16::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new_unchecked(row, col)))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ChessEngineError;

    fn try_from((row, col): (u8, u8)) -> ChessEngineResult<Self> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> (u8, u8) {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_roundtrips_color_and_kind() {
        //! Every (color, kind) pair maps to a distinct identity and back
        let mut seen = Vec::new();
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = PieceIdentity::new(color, kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
                assert!(!seen.contains(&piece), "{:?} {:?} collides", color, kind);
                seen.push(piece);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_identity_accessors_are_const() {
        const BLACK_KING_KIND: PieceKind = PieceIdentity::new(Color::Black, PieceKind::King).kind();
        const WHITE_ROOK_COLOR: Color = PieceIdentity::new(Color::White, PieceKind::Rook).color();
        assert_eq!(BLACK_KING_KIND, PieceKind::King);
        assert_eq!(WHITE_ROOK_COLOR, Color::White);
    }

    #[test]
    fn test_identity_and_square_json() {
        //! Identities serialize as their signed code, squares as a (row, col) pair
        let knight = PieceIdentity::new(Color::Black, PieceKind::Knight);
        assert_eq!(serde_json::to_string(&knight).unwrap(), "-2");
        assert_eq!(serde_json::from_str::<PieceIdentity>("-2").unwrap(), knight);
        assert!(serde_json::from_str::<PieceIdentity>("9").is_err());

        let square = Square::new(6, 4).unwrap();
        assert_eq!(serde_json::to_string(&square).unwrap(), "[6,4]");
        assert_eq!(serde_json::from_str::<Square>("[6,4]").unwrap(), square);
        assert!(serde_json::from_str::<Square>("[8,0]").is_err());
    }

    #[test]
    fn test_identity_rejects_invalid_codes() {
        assert_eq!(
            PieceIdentity::try_from(0),
            Err(ChessEngineError::InvalidIdentity { code: 0 })
        );
        assert_eq!(
            PieceIdentity::try_from(7),
            Err(ChessEngineError::InvalidIdentity { code: 7 })
        );
        assert_eq!(
            PieceIdentity::try_from(-7),
            Err(ChessEngineError::InvalidIdentity { code: -7 })
        );
        assert_eq!(
            PieceIdentity::try_from(i8::MIN),
            Err(ChessEngineError::InvalidIdentity { code: i8::MIN })
        );

        let black_queen = PieceIdentity::try_from(-5).expect("-5 is a black queen");
        assert!(black_queen.is(Color::Black, PieceKind::Queen));
    }

    #[test]
    fn test_kind_from_id() {
        assert_eq!(PieceKind::from_id(6), Ok(PieceKind::King));
        assert_eq!(
            PieceKind::from_id(0),
            Err(ChessEngineError::UnknownKind { id: 0 })
        );
        assert_eq!(
            PieceKind::from_id(9),
            Err(ChessEngineError::UnknownKind { id: 9 })
        );
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessEngineError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(3, 200),
            Err(ChessEngineError::OutOfBounds { row: 3, col: 200 })
        );
    }

    #[test]
    fn test_square_offset_clips_at_edges() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1).unwrap()));

        let far = Square::new(7, 7).unwrap();
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-2, -1), Some(Square::new(5, 6).unwrap()));
    }

    #[test]
    fn test_square_all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn test_color_orientation() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.pawn_start_row(), 1);
    }
}
