//! Statement parsing.

use loxi_lex::TokenKind;

use crate::ast::Stmt;
use crate::error::{ParseContext, ParseError};
use crate::Parser;

impl Parser {
    /// Parses one statement: a `print` statement when the next token is
    /// `print`, otherwise an expression statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if matches!(self.peek().kind, TokenKind::Print) {
            self.advance();
            self.parse_print_statement()
        } else {
            self.parse_expression_statement()
        }
    }

    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expression()?;
        self.expect_semicolon(ParseContext::PrintStatement)?;
        Ok(Stmt::Print(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expression()?;
        self.expect_semicolon(ParseContext::ExpressionStatement)?;
        Ok(Stmt::Expression(value))
    }

    /// Consumes the statement's closing `;`.
    ///
    /// On a miss the offending token stays put; `synchronize` decides how
    /// far to skip, so forward progress is always possible.
    fn expect_semicolon(&mut self, context: ParseContext) -> Result<(), ParseError> {
        if matches!(self.peek().kind, TokenKind::Semicolon) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::MissingSemicolon {
                context,
                span: self.peek().span,
            })
        }
    }
}
