//! Chess rules engine
//!
//! Board state, piece identities, pseudo-legal move generation, the
//! turn/selection controller and the king-capture game-over check. No I/O and
//! no rendering: a presentation layer drives [`api::ChessGame`] and draws what
//! it reports.
//!
//! # Module Structure
//!
//! - `types` - [`Color`], [`PieceKind`], [`PieceIdentity`], [`Square`]
//! - `constants` - identity constants, direction tables, starting layout
//! - `board` - the 8x8 grid
//! - `move_gen` - sliding, stepping and pawn move generation
//! - `evaluation` - king-presence game-over check
//! - `glyph` - identity to display character
//! - `api` - the game controller
//!
//! # Example
//!
//! ```rust,ignore
//! use chess_engine::{new_game, Square};
//!
//! let mut game = new_game();
//! game.select(Square::new(6, 4)?);     // white pawn, offers (5,4) and (4,4)
//! game.select(Square::new(4, 4)?);     // double step, black to move
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod glyph;
pub mod move_gen;
pub mod types;

pub use api::{new_game, ChessGame, GameState, MoveRecord, Phase, SelectOutcome};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate, GameStatus};
pub use glyph::{glyph, GlyphStyle};
pub use move_gen::{generate_pseudo_legal_moves, moves_for, moves_for_coords};
pub use types::{Color, PieceIdentity, PieceKind, Square};
