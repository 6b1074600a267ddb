//! Error types for fenboard operations.
//!
//! [`FenboardError`] covers every failure between block text and SVG output.
//! Parse errors carry the block source so that callers can render rich
//! diagnostics.

use std::io;

use thiserror::Error;

use fenboard_core::square::CoordinateError;
use fenboard_parser::error::ParseError;

/// The main error type for fenboard operations.
#[derive(Debug, Error)]
pub enum FenboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// A FEN or PGN was rejected by the rules engine.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl FenboardError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// A short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse { .. } => "parse",
            Self::InvalidPosition(_) => "invalid_position",
            Self::InvalidCoordinate(_) => "invalid_coordinate",
            Self::Config(_) => "config",
            Self::Export(_) => "export",
        }
    }
}
