//! # fenboard Parser
//!
//! Parser for the fenboard block formats: a FEN block with its annotation
//! mini-language, and a PGN block with an optional `ply:` directive.
//!
//! ## Usage
//!
//! ```
//! # use fenboard_parser::{parse_block, error::ParseError};
//! # use fenboard_core::orientation::Orientation;
//! fn main() -> Result<(), ParseError> {
//!     let block = parse_block(
//!         "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR\n\
//!          orientation: black\n\
//!          annotations: He4 Ae2-e4 !!f3",
//!     )?;
//!     assert_eq!(block.orientation, Orientation::Black);
//!     assert_eq!(block.annotations.len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Permissive annotations
//!
//! An annotation token that does not match any known shape never fails the
//! parse. It is dropped and reported in [`ParsedBlock::discarded`]. The only
//! hard failure of a FEN block is an unknown `orientation:` value.

mod block;
pub mod error;
mod span;
mod token;

pub use span::Span;

use fenboard_core::{annotation::Annotation, orientation::Orientation};
use log::{debug, info};

use error::{Diagnostic, ParseError};

/// The structured content of a FEN block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock {
    /// The position line with any `fen: ` prefix removed. Not validated here.
    pub position: String,
    /// Defaults to white when no `orientation:` line is present.
    pub orientation: Orientation,
    /// Annotations in source order.
    pub annotations: Vec<Annotation>,
    /// Annotation tokens that matched no known shape.
    pub discarded: Vec<DiscardedToken>,
    /// Non-fatal diagnostics, such as a repeated `orientation:` line.
    pub warnings: Vec<Diagnostic>,
}

/// An annotation token that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedToken {
    pub text: String,
    pub span: Span,
}

/// The content of a PGN block.
#[derive(Debug, Clone, PartialEq)]
pub struct PgnBlock {
    /// PGN text with the `ply:` directive lines removed.
    pub pgn: String,
    /// The requested ply, if a `ply:` line was present.
    pub ply: Option<usize>,
    pub warnings: Vec<Diagnostic>,
}

/// Parse a FEN block into a position string, orientation and annotations.
///
/// # Errors
///
/// Returns a [`ParseError`] with code [`E001`](error::ErrorCode::E001) when an
/// `orientation:` line names anything other than `white` or `black`.
pub fn parse_block(text: &str) -> Result<ParsedBlock, ParseError> {
    info!("Parsing diagram block");
    let block = block::parse_block(text)?;
    debug!(
        orientation:% = block.orientation,
        annotations = block.annotations.len(),
        discarded = block.discarded.len();
        "Parsed diagram block"
    );
    Ok(block)
}

/// Parse a PGN block, extracting its `ply:` directive.
///
/// # Errors
///
/// Returns a [`ParseError`] with code [`E101`](error::ErrorCode::E101) when a
/// `ply:` value is not a non-negative integer.
pub fn parse_pgn_block(text: &str) -> Result<PgnBlock, ParseError> {
    info!("Parsing PGN block");
    let block = block::parse_pgn_block(text)?;
    debug!(ply:? = block.ply; "Parsed PGN block");
    Ok(block)
}
