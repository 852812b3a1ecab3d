//! Public API for the chess engine
//!
//! The game controller a presentation layer drives: one explicit
//! [`ChessGame`] value per game, owned by the caller. Every mutating call runs
//! to completion before returning, so callers exposing a game behind a UI or a
//! network boundary only need to serialize calls on that one value.
//!
//! ## Module Organization
//!
//! - `game` - [`ChessGame`] lifecycle and the select state machine
//! - `moves` - move application and the [`SelectOutcome`] report
//! - `state` - the [`GameState`] snapshot (turn, selection, offered moves)

mod game;
mod moves;
mod state;

pub use game::{new_game, ChessGame};
pub use moves::{MoveRecord, SelectOutcome};
pub use state::{GameState, Phase};
