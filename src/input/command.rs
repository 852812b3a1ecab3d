//! Line commands
//!
//! Accepted forms, case-insensitive, surrounding whitespace ignored:
//!
//! - `row col` - grid coordinates, e.g. `6 4`
//! - algebraic square, e.g. `e2` (file `a..h` is column 0..7, rank `1..8` is row 7..0)
//! - `reset`, `help`, `quit`

use chess_engine::constants::BOARD_SIZE;
use chess_engine::Square;

use crate::core::error::{CoreError, CoreResult};

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a square
    Select(Square),
    /// Start over from the standard position
    Reset,
    /// Print the command summary
    Help,
    /// Leave the game
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>   click a square by grid coordinates, e.g. `6 4`
  <square>      click a square by algebraic name, e.g. `e2`
  reset         start a new game
  help          show this message
  quit          exit";

/// Parse a single line; `Ok(None)` for a blank line
pub fn parse_command(line: &str) -> CoreResult<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let lowered = trimmed.to_ascii_lowercase();
    let command = match lowered.as_str() {
        "reset" | "new" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Select(parse_square(other)?),
    };
    Ok(Some(command))
}

fn parse_square(text: &str) -> CoreResult<Square> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [row, col] => parse_coordinates(text, row, col),
        [name] => parse_algebraic(text, name),
        _ => Err(CoreError::invalid_input(
            text,
            "expected `row col`, a square like `e2`, or a command",
        )),
    }
}

fn parse_coordinates(text: &str, row: &str, col: &str) -> CoreResult<Square> {
    let row: u8 = row
        .parse()
        .map_err(|_| CoreError::invalid_input(text, format!("row '{}' is not a number", row)))?;
    let col: u8 = col
        .parse()
        .map_err(|_| CoreError::invalid_input(text, format!("column '{}' is not a number", col)))?;
    Ok(Square::new(row, col)?)
}

fn parse_algebraic(text: &str, name: &str) -> CoreResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(CoreError::invalid_input(text, "unrecognized command"));
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(CoreError::invalid_input(text, "squares run from a1 to h8"));
    }

    let col = file - b'a';
    let row = BOARD_SIZE - (rank - b'0');
    Ok(Square::new(row, col)?)
}
