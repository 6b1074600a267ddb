//! Error and diagnostic types for the block parser.
//!
//! A [`Diagnostic`] is a single error or warning with an optional
//! [`ErrorCode`], labeled spans into the block text and help text. Failing
//! parses return a [`ParseError`] wrapping one or more diagnostics.
//!
//! Malformed annotation tokens are *not* diagnostics: the annotation
//! language is permissive and drops them, reporting each one as a
//! [`DiscardedToken`](crate::DiscardedToken) on the parse result instead.
//!
//! # Example
//!
//! ```
//! # use fenboard_parser::error::{Diagnostic, ErrorCode};
//! # use fenboard_parser::Span;
//! let diag = Diagnostic::error("unknown orientation `up`")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(13..15), "expected `white` or `black`")
//!     .with_help("use `orientation: white` or `orientation: black`");
//! assert_eq!(diag.to_string(), "error[E001]: unknown orientation `up`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
