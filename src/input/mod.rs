//! Input module - turning typed lines into board clicks
//!
//! # Architecture
//!
//! - `command` - [`Command`] and [`parse_command`]
//!
//! Every accepted square becomes exactly one `ChessGame::select` call, the
//! same way a mouse click on a board square would.

pub mod command;

// Re-export commonly used items
pub use command::*;
