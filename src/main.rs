use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_engine::GlyphStyle;
use clap::Parser;
use tracing::{info, warn};

use hotseat_chess::core::{
    init_logging, load_settings, save_settings, settings_path, GameSettings,
};
use hotseat_chess::game::{Session, SessionControl};

/// Two-player chess on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat_chess", version, about)]
struct Cli {
    /// Draw pieces with letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Hide row and column numbers
    #[arg(long)]
    no_coordinates: bool,

    /// Settings file to read (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, e.g. `debug`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut GameSettings) {
        if self.ascii {
            settings.glyph_style = GlyphStyle::Ascii;
        }
        if self.no_coordinates {
            settings.show_coordinates = false;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.settings.clone().unwrap_or_else(settings_path);

    // Read settings before logging exists; the outcome is logged below
    let loaded = load_settings(&path);
    let mut settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => GameSettings::default(),
    };
    cli.apply_overrides(&mut settings);

    init_logging(&settings.log_level).context("failed to set up logging")?;

    match loaded {
        Ok(Some(_)) => info!("[SETTINGS] Loaded settings from {:?}", path),
        Ok(None) => info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path),
        Err(e) => warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            path, e
        ),
    }

    if cli.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
        info!("[SETTINGS] Saved settings to {:?}", path);
    }

    run(Session::new(&settings))
}

fn run(mut session: Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.render())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let reply = session.handle_line(&line);
        if reply.control == SessionControl::Quit {
            break;
        }
        if !reply.output.is_empty() {
            writeln!(stdout, "{}", reply.output)?;
        }
        prompt(&mut stdout)?;
    }

    info!("[SESSION] Goodbye");
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}
