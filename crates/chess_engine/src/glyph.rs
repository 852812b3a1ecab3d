//! Display glyphs for piece identities
//!
//! Glyphs are a one-way presentation concern: identity → character. Nothing
//! in the engine maps a glyph back to an identity, and identity equality is
//! always on the code, never on what it renders as.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceIdentity, PieceKind};

/// Character set used to draw pieces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Chess symbols (♔ white, ♚ black)
    #[default]
    Unicode,
    /// Letters, uppercase white and lowercase black
    Ascii,
}

/// Glyph for a piece in the given style
pub fn glyph(piece: PieceIdentity, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Unicode => unicode_glyph(piece),
        GlyphStyle::Ascii => ascii_glyph(piece),
    }
}

fn unicode_glyph(piece: PieceIdentity) -> char {
    match (piece.color(), piece.kind()) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

fn ascii_glyph(piece: PieceIdentity) -> char {
    let letter = match piece.kind() {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color() {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

impl fmt::Display for PieceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", unicode_glyph(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_glyphs_are_distinct() {
        for style in [GlyphStyle::Unicode, GlyphStyle::Ascii] {
            let mut seen: Vec<char> = ALL_PIECES.iter().map(|p| glyph(*p, style)).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 12, "{:?} glyphs must not collide", style);
        }
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(glyph(W_KING, GlyphStyle::Unicode), '♔');
        assert_eq!(glyph(B_PAWN, GlyphStyle::Unicode), '♟');
        assert_eq!(glyph(W_KNIGHT, GlyphStyle::Ascii), 'N');
        assert_eq!(glyph(B_QUEEN, GlyphStyle::Ascii), 'q');
        assert_eq!(B_ROOK.to_string(), "♜");
    }
}
