//! Board rendering
//!
//! Each square is three columns wide:
//!
//! ```text
//!  ♙   piece          [♙]  selected piece
//!  .   empty square    *   offered empty square
//!                     (♟)  offered capture
//! ```

use std::fmt::Write;

use chess_engine::constants::BOARD_SIZE;
use chess_engine::{glyph, ChessGame, Color, GlyphStyle, MoveRecord, Square};

use crate::core::GameSettings;

/// The settings rendering cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyph_style: GlyphStyle,
    pub show_coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::from(&GameSettings::default())
    }
}

impl From<&GameSettings> for RenderOptions {
    fn from(settings: &GameSettings) -> Self {
        Self {
            glyph_style: settings.glyph_style,
            show_coordinates: settings.show_coordinates,
        }
    }
}

/// The 8x8 grid, row 0 (black's back rank) at the top
pub fn render_board(game: &ChessGame, options: RenderOptions) -> String {
    let mut out = String::new();

    if options.show_coordinates {
        out.push_str("   ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {} ", col);
        }
        out.push('\n');
    }

    for row in 0..BOARD_SIZE {
        if options.show_coordinates {
            let _ = write!(out, "{}  ", row);
        }
        for col in 0..BOARD_SIZE {
            if let Ok(square) = Square::new(row, col) {
                out.push_str(&render_cell(game, square, options.glyph_style));
            }
        }
        out.push('\n');
    }

    out
}

fn render_cell(game: &ChessGame, square: Square, style: GlyphStyle) -> String {
    let state = game.state();
    let piece = game.board().at(square).map(|p| glyph(p, style));

    if state.selected_square == Some(square) {
        return format!("[{}]", piece.unwrap_or('.'));
    }
    match (piece, state.offers(square)) {
        (Some(g), true) => format!("({})", g),
        (None, true) => " * ".to_string(),
        (Some(g), false) => format!(" {} ", g),
        (None, false) => " . ".to_string(),
    }
}

/// "White's Turn" / "Black's Turn"
pub fn turn_indicator(color: Color) -> String {
    format!("{}'s Turn", color.name())
}

/// One-line description of a move, e.g. "White pawn (6, 4) -> (4, 4)"
pub fn describe_move(record: &MoveRecord) -> String {
    let mut text = format!(
        "{} {} {} -> {}",
        record.piece.color(),
        record.piece.kind().name(),
        record.from,
        record.to
    );
    if let Some(captured) = record.captured {
        let _ = write!(text, " takes {}", captured.kind().name());
    }
    text
}

/// Full screen: board, last move, turn indicator and game-over message
pub fn render_view(game: &ChessGame, options: RenderOptions) -> String {
    let mut out = render_board(game, options);
    out.push('\n');

    if let Some(record) = game.last_move() {
        let _ = writeln!(out, "Last move: {}", describe_move(&record));
    }

    let status = game.status();
    if status.is_over() {
        let _ = writeln!(out, "{}", status.message());
    } else {
        let _ = writeln!(out, "{}", turn_indicator(game.current_player()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::constants::*;
    use chess_engine::Board;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn plain() -> RenderOptions {
        RenderOptions {
            glyph_style: GlyphStyle::Ascii,
            show_coordinates: false,
        }
    }

    #[test]
    fn test_starting_position_ascii() {
        let game = ChessGame::new();
        let lines: Vec<String> = render_board(&game, plain())
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
        assert_eq!(lines[1], " p  p  p  p  p  p  p  p ");
        assert_eq!(lines[4], " .  .  .  .  .  .  .  . ");
        assert_eq!(lines[7], " R  N  B  Q  K  B  N  R ");
    }

    #[test]
    fn test_coordinates_add_header_and_row_labels() {
        let game = ChessGame::new();
        let options = RenderOptions {
            show_coordinates: true,
            ..plain()
        };
        let text = render_board(&game, options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0  1  2  3  4  5  6  7 ");
        assert!(lines[1].starts_with("0  "));
        assert!(lines[8].starts_with("7  "));
    }

    #[test]
    fn test_selection_and_offers_are_marked() {
        let mut game = ChessGame::new();
        game.select(sq(6, 4));
        let text = render_board(&game, plain());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[6], " P  P  P  P [P] P  P  P ");
        assert_eq!(lines[5], " .  .  .  .  *  .  .  . ");
        assert_eq!(lines[4], " .  .  .  .  *  .  .  . ");
    }

    #[test]
    fn test_offered_capture_is_parenthesized() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Some(W_ROOK));
        board.place(sq(2, 4), Some(B_PAWN));
        let mut game = ChessGame::from_board(board, Color::White);
        game.select(sq(4, 4));

        let text = render_board(&game, plain());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], " .  .  .  . (p) .  .  . ");
        assert_eq!(lines[3], " .  .  .  .  *  .  .  . ");
    }

    #[test]
    fn test_view_shows_turn_then_game_over() {
        let mut game = ChessGame::new();
        assert!(render_view(&game, plain()).contains("White's Turn"));

        game.select(sq(6, 4));
        game.select(sq(4, 4));
        let view = render_view(&game, plain());
        assert!(view.contains("Black's Turn"));
        assert!(view.contains("Last move: White pawn (6, 4) -> (4, 4)"));

        game.board_mut().take(sq(0, 4));
        let view = render_view(&game, plain());
        assert!(view.contains("Checkmate! White wins!"));
        assert!(!view.contains("Turn"));
    }

    #[test]
    fn test_describe_capture() {
        let record = MoveRecord {
            from: sq(4, 4),
            to: sq(3, 3),
            piece: W_PAWN,
            captured: Some(B_KNIGHT),
        };
        assert_eq!(
            describe_move(&record),
            "White pawn (4, 4) -> (3, 3) takes knight"
        );
    }
}
