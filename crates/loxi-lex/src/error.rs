//! Lexical error types.

use loxi_util::{Diagnostic, Span};
use thiserror::Error;

/// A problem found while scanning, reported with a precise location.
///
/// The scanner accumulates these and keeps going, so one pass over the
/// source reports every lexical problem it contains.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScanError {
    /// A grapheme that starts no token.
    #[error("unexpected character '{grapheme}'")]
    UnexpectedCharacter { grapheme: String, span: Span },

    /// A string literal still open at end of input. The span points at the
    /// opening quote.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
}

impl ScanError {
    /// The source location this error points at.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedCharacter { span, .. } => *span,
            ScanError::UnterminatedString { span } => *span,
        }
    }

    /// Converts the error into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span();
        Diagnostic::error(self.to_string(), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ScanError::UnexpectedCharacter {
            grapheme: "@".into(),
            span: Span::point(1, 4),
        };
        assert_eq!(err.to_string(), "unexpected character '@'");

        let err = ScanError::UnterminatedString {
            span: Span::point(2, 1),
        };
        assert_eq!(err.to_string(), "unterminated string literal");
    }

    #[test]
    fn test_into_diagnostic_keeps_span() {
        let err = ScanError::UnexpectedCharacter {
            grapheme: "#".into(),
            span: Span::point(3, 9),
        };
        let diag = err.into_diagnostic();
        assert_eq!(diag.span, Span::point(3, 9));
        assert_eq!(diag.message, "unexpected character '#'");
    }
}
