//! String literal scanning.
//!
//! Strings run from `"` to the next `"` with no escape processing: a
//! quote always terminates, and everything between the quotes lands in
//! the payload verbatim, embedded line terminators included. The token's
//! span runs from the opening quote to the closing quote, both inclusive,
//! so it may cover several lines.

use loxi_util::Span;

use crate::error::ScanError;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal starting at the opening quote.
    ///
    /// Returns `None` when the input ends before the closing quote; the
    /// error is recorded against the opening quote's position.
    pub(crate) fn scan_string(&mut self) -> Option<Token> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            let Some(grapheme) = self.cursor.current() else {
                self.errors.push(ScanError::UnterminatedString {
                    span: Span::point(self.token_line, self.token_column),
                });
                return None;
            };

            if grapheme == "\"" {
                let line_end = self.cursor.line();
                let column_end = self.cursor.column();
                self.cursor.advance();
                return Some(Token::new(
                    TokenKind::String(content),
                    Span::new(self.token_line, line_end, self.token_column, column_end),
                ));
            }

            content.push_str(grapheme);
            self.cursor.advance();
        }
    }
}
