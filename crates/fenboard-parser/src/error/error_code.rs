//! Error codes for block diagnostics.
//!
//! - `E0xx` - FEN block directives
//! - `E1xx` - PGN block directives
//! - `W0xx` - Warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unknown orientation.
    ///
    /// The value of an `orientation:` directive is neither `white` nor `black`.
    E001,

    /// Invalid ply.
    ///
    /// The value of a `ply:` directive is not a non-negative integer.
    E101,

    /// Repeated directive.
    ///
    /// A single-valued directive appears more than once; the last one wins.
    W001,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E101 => "E101",
            ErrorCode::W001 => "W001",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unknown orientation",
            ErrorCode::E101 => "invalid ply",
            ErrorCode::W001 => "repeated directive",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::W001.as_str(), "W001");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unknown orientation");
        assert_eq!(ErrorCode::E101.description(), "invalid ply");
    }
}
