//! Core module - application infrastructure around the rules engine
//!
//! # Modules
//!
//! - `error` - [`CoreError`] and [`CoreResult`]
//! - `resources` - [`GameSettings`] user preferences
//! - `settings_persistence` - JSON load/save of [`GameSettings`]
//! - `logging` - `tracing` subscriber setup

pub mod error;
pub mod logging;
pub mod resources;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use resources::*;
pub use settings_persistence::{load_settings, save_settings, settings_path};
