//! Game session module - one hot-seat game driven by typed lines
//!
//! # Module Organization
//!
//! - `session` - [`Session`]: owns the [`chess_engine::ChessGame`], routes
//!   parsed commands into it and produces the text to print back
//!
//! Rules live entirely in `chess_engine`; this layer only decides when input
//! is accepted (e.g. board clicks are refused once a king has fallen).

pub mod session;

pub use session::{Reply, Session, SessionControl};
