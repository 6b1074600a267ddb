//! Chess pieces as they appear on a diagram.
//!
//! A [`Piece`] is presentation data only: a [`Side`] and a [`PieceKind`].
//! Move legality lives in the rules engine, never here.

use std::fmt;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns a human-readable name for this side.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six piece types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Parses the lowercase FEN letter of a piece type.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'k' => Some(Self::King),
            'q' => Some(Self::Queen),
            'r' => Some(Self::Rook),
            'b' => Some(Self::Bishop),
            'n' => Some(Self::Knight),
            'p' => Some(Self::Pawn),
            _ => None,
        }
    }

    /// Returns the lowercase FEN letter of this piece type.
    pub fn to_char(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }

    /// Returns the solid Unicode figurine for this piece type.
    ///
    /// The filled figurines are used for both sides; the side color is
    /// applied as fill and the outline as stroke.
    pub fn glyph(self) -> char {
        match self {
            Self::King => '\u{265A}',
            Self::Queen => '\u{265B}',
            Self::Rook => '\u{265C}',
            Self::Bishop => '\u{265D}',
            Self::Knight => '\u{265E}',
            Self::Pawn => '\u{265F}',
        }
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub fn side(self) -> Side {
        self.side
    }

    pub fn kind(self) -> PieceKind {
        self.kind
    }

    /// Decodes a FEN placement letter.
    ///
    /// The side is derived solely from letter case: uppercase is white,
    /// lowercase is black.
    ///
    /// ```
    /// # use fenboard_core::piece::{Piece, PieceKind, Side};
    /// assert_eq!(Piece::from_fen_char('N'), Some(Piece::new(Side::White, PieceKind::Knight)));
    /// assert_eq!(Piece::from_fen_char('q'), Some(Piece::new(Side::Black, PieceKind::Queen)));
    /// assert_eq!(Piece::from_fen_char('x'), None);
    /// ```
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c.to_ascii_lowercase())?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Self { side, kind })
    }

    /// Encodes this piece as a FEN placement letter.
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_char_round_trip() {
        for c in "KQRBNPkqrbnp".chars() {
            let piece = Piece::from_fen_char(c).unwrap();
            assert_eq!(piece.to_fen_char(), c);
        }
    }

    #[test]
    fn test_fen_char_case_sets_side() {
        assert_eq!(Piece::from_fen_char('P').unwrap().side(), Side::White);
        assert_eq!(Piece::from_fen_char('p').unwrap().side(), Side::Black);
    }

    #[test]
    fn test_fen_char_rejects_unknown() {
        assert!(Piece::from_fen_char('1').is_none());
        assert!(Piece::from_fen_char('/').is_none());
        assert!(Piece::from_fen_char('X').is_none());
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
    }
}
