//! Labeled spans for diagnostics.

use crate::span::Span;

/// A message attached to a span of the block text.
///
/// A diagnostic normally has one primary label marking the offending text;
/// secondary labels add context such as "first set here".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let primary = Label::primary(Span::new(13..15), "expected `white` or `black`");
        assert!(primary.is_primary());
        assert_eq!(primary.span().start(), 13);
        assert_eq!(primary.message(), "expected `white` or `black`");

        let secondary = Label::secondary(Span::new(0..5), "first set here");
        assert!(secondary.is_secondary());
    }
}
