//! Error types for chess engine
//!
//! Only programming errors are represented here. Ordinary illegal input
//! (clicking an empty square, picking a destination that was not offered)
//! is a no-op state transition in the controller, never an error.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square coordinates outside the 8x8 grid
    #[error("Square ({row}, {col}) is off the board (rows and columns must be 0-7)")]
    OutOfBounds { row: u8, col: u8 },

    /// Piece kind id that does not name one of the six kinds
    #[error("Unknown piece kind id: {id} (must be 1-6)")]
    UnknownKind { id: u8 },

    /// Raw code that does not name one of the twelve piece identities
    #[error("Invalid piece identity code: {code} (must be 1-6 or -1 to -6)")]
    InvalidIdentity { code: i8 },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
