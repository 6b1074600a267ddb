//! fenboard - annotated chess diagrams as SVG.
//!
//! A block of text holding a FEN (plus `orientation:` and `annotations:`
//! directives) or a PGN game (plus an optional `ply:` directive) is parsed,
//! loaded into a [`board::Chessboard`] and drawn by a
//! [`render::BoardRenderer`] into a 320x320 SVG scene.
//!
//! [`DiagramBuilder`] is the entry point for hosts.

pub mod board;
pub mod config;
pub mod export;
pub mod navigation;
pub mod pgn;
pub mod render;
pub mod rules;

mod error;

pub use fenboard_core::{annotation, color, orientation, piece, square};
pub use fenboard_parser::{DiscardedToken, ParsedBlock, PgnBlock};

pub use error::FenboardError;

use std::fmt;

use log::{debug, info, trace, warn};
use svg::{Document, node::element as svg_element};

use board::Chessboard;
use config::AppConfig;
use navigation::PgnNavigator;
use render::{BOARD_PIXELS, BoardRenderer, RenderOptions};

/// The two block formats a host can hand to [`DiagramBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A FEN line followed by directives.
    Fen,
    /// A PGN game with an optional `ply:` line.
    Pgn,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fen => write!(f, "fen"),
            Self::Pgn => write!(f, "pgn"),
        }
    }
}

/// Builder for parsing and rendering board diagrams.
///
/// # Examples
///
/// ```
/// use fenboard::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder
///     .render_block("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR\nannotations: He4 Ae2-e4")
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// // Errors become an inline error diagram instead.
/// let svg = builder.render_block_or_error(
///     fenboard::BlockKind::Fen,
///     "8/8/8/8/8/8/8/8\norientation: up",
/// );
/// assert!(svg.contains("unknown orientation"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a FEN block without loading the position.
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError::Parse`] for an unknown orientation.
    pub fn parse_block(&self, text: &str) -> Result<ParsedBlock, FenboardError> {
        let block = fenboard_parser::parse_block(text)
            .map_err(|err| FenboardError::new_parse_error(err, text))?;
        for warning in &block.warnings {
            warn!(warning:% = warning; "Block warning");
        }
        trace!(block:?; "Parsed block");
        Ok(block)
    }

    /// Build a renderer for a FEN block, with its annotations applied.
    pub fn renderer_for_block(&self, text: &str) -> Result<BoardRenderer, FenboardError> {
        let block = self.parse_block(text)?;

        info!(orientation:% = block.orientation; "Loading position");
        let board = Chessboard::from_fen(&block.position, false)?;
        debug!(placement = board.to_placement(); "Position loaded");

        let options = RenderOptions::from_config(&self.config, block.orientation)?;
        let mut renderer = BoardRenderer::new(board, options);
        renderer.add_annotations(&block.annotations);
        Ok(renderer)
    }

    /// Render a FEN block to an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError`] for parse errors, an invalid position or an
    /// invalid configured color.
    pub fn render_block(&self, text: &str) -> Result<String, FenboardError> {
        let renderer = self.renderer_for_block(text)?;
        let svg = renderer.to_document(self.config.board().width()).to_string();
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a PGN block at `ply_override`, or at the block's `ply:` line,
    /// or at the final position.
    pub fn render_pgn_block(
        &self,
        text: &str,
        ply_override: Option<usize>,
    ) -> Result<String, FenboardError> {
        let (block, mut navigator) = self.navigator_for_block(text)?;
        match ply_override.or(block.ply) {
            Some(ply) => navigator.go_to_ply(ply)?,
            None => navigator.end()?,
        }
        let svg = self.render_navigator(&navigator)?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render every ply of a PGN block, from the start position to the end.
    pub fn render_pgn_plies(&self, text: &str) -> Result<Vec<String>, FenboardError> {
        let (_, mut navigator) = self.navigator_for_block(text)?;
        let mut documents = Vec::with_capacity(navigator.total_plies() + 1);
        documents.push(self.render_navigator(&navigator)?);
        while navigator.can_go_forward() {
            navigator.next()?;
            documents.push(self.render_navigator(&navigator)?);
        }
        info!(plies = documents.len(); "Rendered all plies");
        Ok(documents)
    }

    /// Render a block, turning any failure into an inline error diagram.
    ///
    /// This never fails, so hosts can mount the result unconditionally.
    pub fn render_block_or_error(&self, kind: BlockKind, text: &str) -> String {
        let result = match kind {
            BlockKind::Fen => self.render_block(text),
            BlockKind::Pgn => self.render_pgn_block(text, None),
        };
        result.unwrap_or_else(|err| {
            warn!(kind:% = kind, err:% = err; "Rendering inline error");
            error_document(&err, self.config.board().width()).to_string()
        })
    }

    fn navigator_for_block(&self, text: &str) -> Result<(PgnBlock, PgnNavigator), FenboardError> {
        let block = fenboard_parser::parse_pgn_block(text)
            .map_err(|err| FenboardError::new_parse_error(err, text))?;
        for warning in &block.warnings {
            warn!(warning:% = warning; "Block warning");
        }
        let navigator = PgnNavigator::new(&block.pgn, None)?;
        Ok((block, navigator))
    }

    fn render_navigator(&self, navigator: &PgnNavigator) -> Result<String, FenboardError> {
        let options = RenderOptions::from_config(&self.config, Default::default())?;
        let mut renderer = BoardRenderer::new(navigator.board(), options);
        if let Some(mv) = navigator.last_move() {
            renderer.show_move(mv, self.config.board().show_move());
        }

        let caption = navigator.caption();
        debug!(caption; "Rendering ply");
        renderer.set_title(caption);
        Ok(renderer.to_document(self.config.board().width()).to_string())
    }
}

/// An SVG showing an error message in place of a board, one line of text
/// per line of the message.
fn error_document(err: &FenboardError, width: u32) -> Document {
    let background = svg_element::Rectangle::new()
        .set("width", BOARD_PIXELS)
        .set("height", BOARD_PIXELS)
        .set("fill", "#fff0f0")
        .set("stroke", "#cc0000");

    let mut message = svg_element::Group::new()
        .set("data-error", err.kind())
        .set("font-family", "sans-serif")
        .set("font-size", 12)
        .set("fill", "#cc0000");
    for (index, line) in err.to_string().lines().enumerate() {
        let text = svg_element::Text::new(line)
            .set("x", 10)
            .set("y", 24 + 16 * index);
        message = message.add(text);
    }

    Document::new()
        .set("viewBox", format!("0 0 {BOARD_PIXELS} {BOARD_PIXELS}"))
        .set("width", width)
        .set("height", width)
        .add(background)
        .add(message)
}
