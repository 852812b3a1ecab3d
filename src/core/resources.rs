//! User-facing settings

use chess_engine::GlyphStyle;
use serde::{Deserialize, Serialize};

/// Preferences persisted between sessions
///
/// Missing fields fall back to their defaults, so older settings files keep
/// loading as fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Characters used to draw pieces
    pub glyph_style: GlyphStyle,

    /// Whether to print row and column numbers around the board
    pub show_coordinates: bool,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            glyph_style: GlyphStyle::Unicode,
            show_coordinates: true,
            log_level: "info".to_string(),
        }
    }
}
