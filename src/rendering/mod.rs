//! Rendering module - text board for a terminal
//!
//! # Architecture
//!
//! - `board` - grid, selection and move highlights, turn and status lines
//!
//! Rendering only reads from [`chess_engine::ChessGame`]; it never mutates the
//! game and never decides anything about the rules.

pub mod board;

pub use board::*;
