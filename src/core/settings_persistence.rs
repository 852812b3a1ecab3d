//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file in the user's
//! configuration directory.
//!
//! # Error Handling
//!
//! Loading never aborts startup. A missing file yields `Ok(None)`; a file that
//! cannot be read or parsed yields an error the caller logs before falling
//! back to defaults. Logging is not installed yet when settings are read (the
//! log level itself comes from the file), so these functions do not log.

use crate::core::error::CoreResult;
use crate::core::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
///
/// E.g. `~/.config/hotseatchess/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "HotseatChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
///
/// Returns `Ok(None)` when no file exists.
pub fn load_settings(path: &Path) -> CoreResult<Option<GameSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<GameSettings>(&contents)?;
    Ok(Some(settings))
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
