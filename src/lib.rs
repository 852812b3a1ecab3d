//! Terminal front end for the `chess_engine` rules crate
//!
//! - `core` - settings, settings persistence, logging, errors
//! - `input` - typed lines to board clicks
//! - `rendering` - text board
//! - `game` - the hot-seat session tying them together

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
