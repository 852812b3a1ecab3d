//! # Chess Engine Constants - Identities, Direction Vectors & Setup
//!
//! ## Piece Identities
//!
//! The twelve identities are exposed as named constants (`W_PAWN` .. `B_KING`).
//! Their codes follow the signed encoding described in [`crate::types`]:
//! white pieces are `1..=6`, black pieces are `-1..=-6`.
//!
//! ## Direction Vectors for Move Generation
//!
//! Movement is encoded as `(row_delta, col_delta)` pairs on the 8x8 grid:
//! - **Up**: `(-1, 0)` (toward row 0, black's back rank)
//! - **Down**: `(1, 0)` (toward row 7, white's back rank)
//! - **Left**: `(0, -1)`
//! - **Right**: `(0, 1)`
//! - **Diagonals**: combinations of the above
//!
//! Stepping the grid with these deltas goes through [`crate::types::Square::offset`],
//! which clips at the edge. A delta that would leave the board produces no
//! square, so there is no wraparound to guard against.
//!
//! ### Knight Moves: The "L-Shape" Pattern
//!
//! Knights jump rather than slide. Their eight offsets are every combination of
//! one step on one axis and two on the other. Intervening pieces never matter.
//!
//! ## Table Order
//!
//! The order of every table here is the order destinations are reported in, so
//! callers rendering or testing move lists see a stable sequence.

use crate::types::{Color, PieceIdentity, PieceKind};

pub const BOARD_SIZE: u8 = 8;

// White identities
pub const W_PAWN: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::Pawn);
pub const W_KNIGHT: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::Knight);
pub const W_BISHOP: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::Bishop);
pub const W_ROOK: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::Rook);
pub const W_QUEEN: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::Queen);
pub const W_KING: PieceIdentity = PieceIdentity::new(Color::White, PieceKind::King);

// Black identities
pub const B_PAWN: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::Pawn);
pub const B_KNIGHT: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::Knight);
pub const B_BISHOP: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::Bishop);
pub const B_ROOK: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::Rook);
pub const B_QUEEN: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::Queen);
pub const B_KING: PieceIdentity = PieceIdentity::new(Color::Black, PieceKind::King);

/// All twelve identities, white first, each side in kind order
pub const ALL_PIECES: [PieceIdentity; 12] = [
    W_PAWN, W_KNIGHT, W_BISHOP, W_ROOK, W_QUEEN, W_KING, B_PAWN, B_KNIGHT, B_BISHOP, B_ROOK,
    B_QUEEN, B_KING,
];

// Directions
pub const UP: (i8, i8) = (-1, 0);
pub const DOWN: (i8, i8) = (1, 0);
pub const LEFT: (i8, i8) = (0, -1);
pub const RIGHT: (i8, i8) = (0, 1);
pub const UP_LEFT: (i8, i8) = (-1, -1);
pub const UP_RIGHT: (i8, i8) = (-1, 1);
pub const DOWN_LEFT: (i8, i8) = (1, -1);
pub const DOWN_RIGHT: (i8, i8) = (1, 1);

pub const ROOK_DIRS: [(i8, i8); 4] = [UP, DOWN, LEFT, RIGHT];
pub const BISHOP_DIRS: [(i8, i8); 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    UP, DOWN, LEFT, RIGHT, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT,
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    UP_LEFT, UP, UP_RIGHT, LEFT, RIGHT, DOWN_LEFT, DOWN, DOWN_RIGHT,
];

/// Column deltas of the two diagonal pawn captures
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// Back-rank kinds from column 0 to column 7, same for both sides
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Upper bound on destinations any single piece can have (a centralized queen)
pub const MAX_PIECE_MOVES: usize = 27;
