//! Parse error types.

use std::fmt;

use loxi_lex::Token;
use loxi_util::{Diagnostic, Span};
use thiserror::Error;

/// What the parser was in the middle of when an error surfaced.
///
/// Carried by every [`ParseError`] so messages can say which production
/// failed, not just which token was wrong.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseContext {
    /// Inside a parenthesized group opened by the given token.
    Group { open: Token },
    /// A `print` statement.
    PrintStatement,
    /// A bare expression statement.
    ExpressionStatement,
    /// Expecting a literal or an opening parenthesis.
    Primary,
    /// Expecting an operand after a unary operator.
    UnaryOrPrimary,
    /// Expecting the start of an expression.
    Expression,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseContext::Group { .. } => write!(f, "a parenthesized expression"),
            ParseContext::PrintStatement => write!(f, "a print statement"),
            ParseContext::ExpressionStatement => write!(f, "an expression statement"),
            ParseContext::Primary => write!(f, "a literal or group"),
            ParseContext::UnaryOrPrimary => write!(f, "the operand of a unary operator"),
            ParseContext::Expression => write!(f, "an expression"),
        }
    }
}

/// A syntax error, tied to the production that was being parsed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    /// The token stream ran out mid-production. The span points at the end
    /// of input.
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof { context: ParseContext, span: Span },

    /// A token that cannot continue the current production.
    #[error("unexpected token '{}' while parsing {}", .token.kind.lexeme(), .context)]
    UnexpectedToken { token: Token, context: ParseContext },

    /// A statement's closing `;` was absent after a complete expression.
    /// The span points at the token found instead.
    #[error("expected ';' after {context}")]
    MissingSemicolon { context: ParseContext, span: Span },
}

impl ParseError {
    /// The source location this error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedEof { span, .. } => *span,
            ParseError::UnexpectedToken { token, .. } => token.span,
            ParseError::MissingSemicolon { span, .. } => *span,
        }
    }

    /// Converts the error into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span();
        Diagnostic::error(self.to_string(), span)
    }
}
