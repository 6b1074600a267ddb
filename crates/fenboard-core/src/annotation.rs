//! Presentation-only annotations drawn on top of a board.
//!
//! Annotations never carry game semantics. They are produced either by the
//! block parser or by programmatic calls on the renderer, and are composited
//! in a fixed z-order: highlights and arrows under the pieces, markers and
//! icons above them.

use std::fmt;

use crate::{color::Color, square::Square};

/// The fixed annotation palette of the block mini-language.
///
/// Highlights default to [`Palette::Red`], arrows to [`Palette::Yellow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Palette {
    /// Returns the hex value of this palette entry.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#e67768",
            Self::Yellow => "#f1ad24",
            Self::Green => "#b3ce6e",
            Self::Blue => "#6ab5d6",
        }
    }

    /// Looks up a two-character color suffix such as `/g`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "/r" => Some(Self::Red),
            "/y" => Some(Self::Yellow),
            "/g" => Some(Self::Green),
            "/b" => Some(Self::Blue),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        Color::new(self.hex()).expect("palette entries are valid hex colors")
    }
}

/// Move-quality icon kinds.
///
/// Every kind has a badge, even those the block parser never produces
/// (`best`, `inaccuracy`, `incorrect`), so that programmatic callers can use
/// the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Brilliant,
    Good,
    Blunder,
    Mistake,
    Excellent,
    Forced,
    Best,
    Inaccuracy,
    Incorrect,
}

impl IconKind {
    /// All icon kinds, in declaration order.
    pub const ALL: [IconKind; 9] = [
        Self::Brilliant,
        Self::Good,
        Self::Blunder,
        Self::Mistake,
        Self::Excellent,
        Self::Forced,
        Self::Best,
        Self::Inaccuracy,
        Self::Incorrect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brilliant => "brilliant",
            Self::Good => "good",
            Self::Blunder => "blunder",
            Self::Mistake => "mistake",
            Self::Excellent => "excellent",
            Self::Forced => "forced",
            Self::Best => "best",
            Self::Inaccuracy => "inaccuracy",
            Self::Incorrect => "incorrect",
        }
    }

    /// Maps an annotation token marker to its icon kind.
    ///
    /// Only the six markers of the block mini-language are recognized:
    /// `F`, `!!`, `!?`, `??`, `!` and `?`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "F" => Some(Self::Forced),
            "!!" => Some(Self::Brilliant),
            "!?" => Some(Self::Good),
            "??" => Some(Self::Blunder),
            "!" => Some(Self::Excellent),
            "?" => Some(Self::Mistake),
            _ => None,
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outline shapes that can mark a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    /// A square with rounded corners.
    Squircle,
}

/// One annotation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Highlight { square: Square, color: Color },
    Arrow { from: Square, to: Square, color: Color },
    Icon { square: Square, kind: IconKind },
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlight { square, color } => write!(f, "highlight {square} ({color})"),
            Self::Arrow { from, to, color } => write!(f, "arrow {from}-{to} ({color})"),
            Self::Icon { square, kind } => write!(f, "{kind} icon {square}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_suffixes() {
        assert_eq!(Palette::from_suffix("/r"), Some(Palette::Red));
        assert_eq!(Palette::from_suffix("/y"), Some(Palette::Yellow));
        assert_eq!(Palette::from_suffix("/g"), Some(Palette::Green));
        assert_eq!(Palette::from_suffix("/b"), Some(Palette::Blue));
        assert_eq!(Palette::from_suffix("/x"), None);
        assert_eq!(Palette::from_suffix("e4"), None);
    }

    #[test]
    fn test_palette_colors_parse() {
        for palette in [Palette::Red, Palette::Yellow, Palette::Green, Palette::Blue] {
            assert_eq!(palette.color(), Color::new(palette.hex()).unwrap());
        }
    }

    #[test]
    fn test_icon_kind_markers() {
        assert_eq!(IconKind::from_marker("F"), Some(IconKind::Forced));
        assert_eq!(IconKind::from_marker("!!"), Some(IconKind::Brilliant));
        assert_eq!(IconKind::from_marker("!?"), Some(IconKind::Good));
        assert_eq!(IconKind::from_marker("??"), Some(IconKind::Blunder));
        assert_eq!(IconKind::from_marker("!"), Some(IconKind::Excellent));
        assert_eq!(IconKind::from_marker("?"), Some(IconKind::Mistake));
        assert_eq!(IconKind::from_marker("?!"), None);
    }

    #[test]
    fn test_icon_kind_names_are_distinct() {
        let names: std::collections::HashSet<_> = IconKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), IconKind::ALL.len());
        assert_eq!(IconKind::Inaccuracy.to_string(), "inaccuracy");
    }
}
