//! Line-oriented scanning of diagram blocks.
//!
//! A FEN block is a position line followed by directive lines:
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1
//! orientation: black
//! annotations: He4 Ae2-e4/b !!e4
//! ```
//!
//! A PGN block is PGN text with an optional `ply: <n>` line, which is removed
//! before the text reaches the PGN loader.

use fenboard_core::orientation::Orientation;
use log::{debug, trace};

use crate::{
    DiscardedToken, ParsedBlock, PgnBlock, Span,
    error::{Diagnostic, ErrorCode, ParseError},
    token,
};

const FEN_PREFIX: &str = "fen: ";
const ORIENTATION_DIRECTIVE: &str = "orientation: ";
const ANNOTATIONS_DIRECTIVE: &str = "annotations: ";
const PLY_DIRECTIVE: &str = "ply:";

/// A line of the block with its byte offset.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Line<'a> {
    /// Strips leading whitespace, keeping the offset in step.
    fn trim_start(self) -> Self {
        let trimmed = self.text.trim_start();
        Self {
            text: trimmed,
            offset: self.offset + (self.text.len() - trimmed.len()),
        }
    }

    fn trim(self) -> Self {
        let start = self.trim_start();
        Self {
            text: start.text.trim_end(),
            offset: start.offset,
        }
    }

    fn strip_prefix(self, prefix: &str) -> Option<Self> {
        self.text.strip_prefix(prefix).map(|rest| Self {
            text: rest,
            offset: self.offset + prefix.len(),
        })
    }

    fn span(self) -> Span {
        Span::new(self.offset..self.offset + self.text.len())
    }

    /// Splits on spaces, yielding each non-empty word with its own offset.
    fn words(self) -> impl Iterator<Item = Line<'a>> {
        let mut offset = self.offset;
        self.text.split(' ').filter_map(move |word| {
            let line = Line { text: word, offset };
            offset += word.len() + 1;
            (!word.is_empty()).then_some(line)
        })
    }
}

/// Splits `text` into lines (`\n` or `\r\n`) with their byte offsets.
fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    text.split('\n').map(move |raw| {
        let line = Line {
            text: raw.strip_suffix('\r').unwrap_or(raw),
            offset,
        };
        offset += raw.len() + 1;
        line
    })
}

pub(crate) fn parse_block(text: &str) -> Result<ParsedBlock, ParseError> {
    let mut lines = lines(text);

    let position = lines
        .next()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(FEN_PREFIX).unwrap_or(line).text.trim()
        })
        .unwrap_or_default()
        .to_string();

    let mut block = ParsedBlock {
        position,
        orientation: Orientation::default(),
        annotations: Vec::new(),
        discarded: Vec::new(),
        warnings: Vec::new(),
    };
    let mut orientation_span: Option<Span> = None;

    for line in lines {
        let line = line.trim_start();
        if line.text.trim().is_empty() {
            continue;
        }

        if let Some(value) = line.strip_prefix(ORIENTATION_DIRECTIVE) {
            let value = value.trim();
            block.orientation = parse_orientation(value)?;
            if let Some(previous) = orientation_span {
                block.warnings.push(
                    Diagnostic::warning("orientation is set more than once")
                        .with_code(ErrorCode::W001)
                        .with_label(value.span(), "this value wins")
                        .with_secondary_label(previous, "earlier value ignored"),
                );
            }
            orientation_span = Some(value.span());
        } else if let Some(tokens) = line.strip_prefix(ANNOTATIONS_DIRECTIVE) {
            for word in tokens.words() {
                match token::parse_token(word.text) {
                    Some(annotation) => {
                        trace!(annotation:% = annotation; "Parsed annotation token");
                        block.annotations.push(annotation);
                    }
                    None => {
                        debug!(token = word.text; "Discarding unrecognized annotation token");
                        block.discarded.push(DiscardedToken {
                            text: word.text.to_string(),
                            span: word.span(),
                        });
                    }
                }
            }
        } else {
            trace!(line = line.text; "Ignoring unrecognized block line");
        }
    }

    Ok(block)
}

fn parse_orientation(value: Line<'_>) -> Result<Orientation, ParseError> {
    value.text.parse::<Orientation>().map_err(|_| {
        Diagnostic::error(format!("unknown orientation `{}`", value.text))
            .with_code(ErrorCode::E001)
            .with_label(value.span(), "expected `white` or `black`")
            .with_help("use `orientation: white` or `orientation: black`")
            .into()
    })
}

pub(crate) fn parse_pgn_block(text: &str) -> Result<PgnBlock, ParseError> {
    let mut ply = None;
    let mut ply_span: Option<Span> = None;
    let mut warnings = Vec::new();
    let mut pgn_lines = Vec::new();

    for line in lines(text) {
        let Some(value) = line.trim_start().strip_prefix(PLY_DIRECTIVE) else {
            pgn_lines.push(line.text);
            continue;
        };

        let value = value.trim();
        let parsed = value.text.parse::<usize>().map_err(|_| {
            ParseError::from(
                Diagnostic::error(format!("invalid ply `{}`", value.text))
                    .with_code(ErrorCode::E101)
                    .with_label(value.span(), "expected a non-negative integer")
                    .with_help("`ply: 0` shows the starting position, `ply: 1` the position after White's first move"),
            )
        })?;

        if let Some(previous) = ply_span {
            warnings.push(
                Diagnostic::warning("ply is set more than once")
                    .with_code(ErrorCode::W001)
                    .with_label(value.span(), "this value wins")
                    .with_secondary_label(previous, "earlier value ignored"),
            );
        }
        ply = Some(parsed);
        ply_span = Some(value.span());
    }

    Ok(PgnBlock {
        pgn: pgn_lines.join("\n").trim().to_string(),
        ply,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use fenboard_core::annotation::{Annotation, IconKind, Palette};

    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_position_only() {
        let block = parse_block(START).unwrap();
        assert_eq!(block.position, START);
        assert_eq!(block.orientation, Orientation::White);
        assert!(block.annotations.is_empty());
    }

    #[test]
    fn test_fen_prefix_is_stripped() {
        let block = parse_block(&format!("fen: {START} w - - 0 1")).unwrap();
        assert_eq!(block.position, format!("{START} w - - 0 1"));
    }

    #[test]
    fn test_orientation_directive() {
        let block = parse_block(&format!("{START}\norientation: black")).unwrap();
        assert_eq!(block.orientation, Orientation::Black);
        assert!(block.warnings.is_empty());
    }

    #[test]
    fn test_last_orientation_wins_with_warning() {
        let block =
            parse_block(&format!("{START}\norientation: black\norientation: white")).unwrap();
        assert_eq!(block.orientation, Orientation::White);
        assert_eq!(block.warnings.len(), 1);
        assert_eq!(block.warnings[0].code(), Some(ErrorCode::W001));
    }

    #[test]
    fn test_unknown_orientation_is_an_error() {
        let text = format!("{START}\norientation: up");
        let err = parse_block(&text).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels()[0].span().slice(&text), Some("up"));
    }

    #[test]
    fn test_annotation_tokens_with_spans() {
        let text = format!("{START}\nannotations: He4  Ae2-e4 bogus !!f3");
        let block = parse_block(&text).unwrap();

        assert_eq!(block.annotations.len(), 3);
        assert_eq!(
            block.annotations[2],
            Annotation::Icon {
                square: "f3".parse().unwrap(),
                kind: IconKind::Brilliant,
            }
        );
        assert_eq!(block.discarded.len(), 1);
        assert_eq!(block.discarded[0].text, "bogus");
        assert_eq!(block.discarded[0].span.slice(&text), Some("bogus"));
    }

    #[test]
    fn test_annotation_lines_accumulate() {
        let text = format!("{START}\nannotations: He4\n\nannotations: Hd4/b\r\n");
        let block = parse_block(&text).unwrap();

        assert_eq!(
            block.annotations,
            vec![
                Annotation::Highlight {
                    square: "e4".parse().unwrap(),
                    color: Palette::Red.color(),
                },
                Annotation::Highlight {
                    square: "d4".parse().unwrap(),
                    color: Palette::Blue.color(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let block = parse_block(&format!("{START}\ntitle: Opening\nannotations:He4")).unwrap();
        assert!(block.annotations.is_empty());
        assert!(block.discarded.is_empty());
    }

    #[test]
    fn test_empty_block() {
        let block = parse_block("").unwrap();
        assert_eq!(block.position, "");
    }

    #[test]
    fn test_pgn_block_ply_directive() {
        let block = parse_pgn_block("[Event \"Casual\"]\n\n1. e4 e5 2. Nf3 *\nply: 3\n").unwrap();
        assert_eq!(block.ply, Some(3));
        assert_eq!(block.pgn, "[Event \"Casual\"]\n\n1. e4 e5 2. Nf3 *");
    }

    #[test]
    fn test_pgn_block_without_ply() {
        let block = parse_pgn_block("1. d4 d5").unwrap();
        assert_eq!(block.ply, None);
        assert_eq!(block.pgn, "1. d4 d5");
    }

    #[test]
    fn test_pgn_block_invalid_ply() {
        let text = "1. e4 e5\nply: -2";
        let err = parse_pgn_block(text).unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels()[0].span().slice(text), Some("-2"));
    }
}
