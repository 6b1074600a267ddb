//! Annotation token grammar.
//!
//! Each whitespace-separated token of an `annotations:` line is parsed on its
//! own. The token's prefix decides its shape:
//!
//! | Prefix | Shape | Example |
//! |--------|-------|---------|
//! | `H` | highlight | `He4`, `He4/g` |
//! | `A` | arrow | `Ae2-e4`, `Ae2-e4/b` |
//! | `F`, `!!`, `!?`, `??`, `!`, `?` | icon | `!!f3`, `?g7` |
//!
//! Icon markers are tried in that order, so two-character markers win over
//! their one-character prefixes. Whatever follows the square(s) is ignored,
//! except that the last two characters of the whole token select the color
//! (`/r`, `/y`, `/g`, `/b`).

use fenboard_core::{
    annotation::{Annotation, IconKind, Palette},
    square::Square,
};
use winnow::{
    Parser as _,
    combinator::{alt, preceded, separated_pair},
    error::ModalResult,
    token::one_of,
};

/// The shape of a token, before color resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenShape {
    Highlight(Square),
    Arrow(Square, Square),
    Icon(IconKind, Square),
}

/// A square in algebraic notation, case-insensitive.
fn square(input: &mut &str) -> ModalResult<Square> {
    (
        one_of(|c: char| matches!(c.to_ascii_lowercase(), 'a'..='h')),
        one_of('1'..='8'),
    )
        .try_map(|(file, rank): (char, char)| {
            let file = file.to_ascii_lowercase() as usize - 'a' as usize;
            let rank = '8' as usize - rank as usize;
            Square::new(file, rank)
        })
        .parse_next(input)
}

fn highlight(input: &mut &str) -> ModalResult<TokenShape> {
    preceded('H', square).map(TokenShape::Highlight).parse_next(input)
}

fn arrow(input: &mut &str) -> ModalResult<TokenShape> {
    preceded('A', separated_pair(square, '-', square))
        .map(|(from, to)| TokenShape::Arrow(from, to))
        .parse_next(input)
}

fn icon_marker(input: &mut &str) -> ModalResult<IconKind> {
    alt(("F", "!!", "!?", "??", "!", "?"))
        .verify_map(IconKind::from_marker)
        .parse_next(input)
}

fn icon(input: &mut &str) -> ModalResult<TokenShape> {
    (icon_marker, square)
        .map(|(kind, square)| TokenShape::Icon(kind, square))
        .parse_next(input)
}

fn token_shape(input: &mut &str) -> ModalResult<TokenShape> {
    alt((highlight, arrow, icon)).parse_next(input)
}

/// Returns the palette entry named by the token's last two characters.
fn color_suffix(token: &str) -> Option<Palette> {
    let start = token.char_indices().rev().nth(1).map(|(i, _)| i)?;
    Palette::from_suffix(&token[start..])
}

/// Parses a single annotation token.
///
/// Returns `None` when the token matches no known shape; callers treat that
/// as a silently dropped token.
pub(crate) fn parse_token(token: &str) -> Option<Annotation> {
    let mut input = token;
    let shape = token_shape.parse_next(&mut input).ok()?;
    let suffix = color_suffix(token);

    let annotation = match shape {
        TokenShape::Highlight(square) => {
            let palette = match suffix {
                Some(p @ (Palette::Yellow | Palette::Green | Palette::Blue)) => p,
                _ => Palette::Red,
            };
            Annotation::Highlight {
                square,
                color: palette.color(),
            }
        }
        TokenShape::Arrow(from, to) => {
            let palette = match suffix {
                Some(p @ (Palette::Red | Palette::Green | Palette::Blue)) => p,
                _ => Palette::Yellow,
            };
            Annotation::Arrow {
                from,
                to,
                color: palette.color(),
            }
        }
        TokenShape::Icon(kind, square) => Annotation::Icon { square, kind },
    };
    Some(annotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_highlight_default_color() {
        assert_eq!(
            parse_token("He4"),
            Some(Annotation::Highlight {
                square: sq("e4"),
                color: Palette::Red.color(),
            })
        );
    }

    #[test]
    fn test_highlight_suffix_colors() {
        for (token, palette) in [
            ("He4/y", Palette::Yellow),
            ("He4/g", Palette::Green),
            ("He4/b", Palette::Blue),
            ("He4/r", Palette::Red),
            ("He4/x", Palette::Red),
        ] {
            assert_eq!(
                parse_token(token),
                Some(Annotation::Highlight {
                    square: sq("e4"),
                    color: palette.color(),
                }),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_arrow_colors() {
        let arrow = |palette: Palette| {
            Some(Annotation::Arrow {
                from: sq("e2"),
                to: sq("e4"),
                color: palette.color(),
            })
        };
        assert_eq!(parse_token("Ae2-e4"), arrow(Palette::Yellow));
        assert_eq!(parse_token("Ae2-e4/r"), arrow(Palette::Red));
        assert_eq!(parse_token("Ae2-e4/g"), arrow(Palette::Green));
        assert_eq!(parse_token("Ae2-e4/b"), arrow(Palette::Blue));
        assert_eq!(parse_token("Ae2-e4/y"), arrow(Palette::Yellow));
    }

    #[test]
    fn test_icon_markers() {
        let icon = |kind, square: &str| {
            Some(Annotation::Icon {
                square: sq(square),
                kind,
            })
        };
        assert_eq!(parse_token("Fd5"), icon(IconKind::Forced, "d5"));
        assert_eq!(parse_token("!!f3"), icon(IconKind::Brilliant, "f3"));
        assert_eq!(parse_token("!?c4"), icon(IconKind::Good, "c4"));
        assert_eq!(parse_token("??h7"), icon(IconKind::Blunder, "h7"));
        assert_eq!(parse_token("!b2"), icon(IconKind::Excellent, "b2"));
        assert_eq!(parse_token("?g7"), icon(IconKind::Mistake, "g7"));
    }

    #[test]
    fn test_uppercase_square_is_accepted() {
        assert_eq!(
            parse_token("HE4"),
            Some(Annotation::Highlight {
                square: sq("e4"),
                color: Palette::Red.color(),
            })
        );
    }

    #[test]
    fn test_trailing_text_after_squares_is_ignored() {
        assert_eq!(
            parse_token("He4zz"),
            Some(Annotation::Highlight {
                square: sq("e4"),
                color: Palette::Red.color(),
            })
        );
        assert_eq!(
            parse_token("Ae2-e4!!/g"),
            Some(Annotation::Arrow {
                from: sq("e2"),
                to: sq("e4"),
                color: Palette::Green.color(),
            })
        );
        assert_eq!(
            parse_token("??h7+"),
            Some(Annotation::Icon {
                square: sq("h7"),
                kind: IconKind::Blunder,
            })
        );
    }

    #[test]
    fn test_malformed_tokens_are_dropped() {
        for token in [
            "", "H", "Hz9", "He9", "Xe4", "Ae2", "Ae2e4", "Ae2-", "Ae2-i4", "!!", "?!e4", "F",
            "h e4",
        ] {
            assert_eq!(parse_token(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_color_suffix_is_char_boundary_safe() {
        assert_eq!(color_suffix("He4é"), None);
        assert_eq!(color_suffix("/"), None);
        assert_eq!(color_suffix("/g"), Some(Palette::Green));
    }
}
