//! Number literal scanning.
//!
//! A number is `digits ('.' digits?)?` - it never starts with a dot and
//! carries no exponent. A trailing dot with no fractional digits is a
//! valid literal (`123.`), and at most one dot is ever absorbed. The token
//! keeps the raw lexeme; the parser converts it to a double.

use crate::classify::is_digit;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a number literal starting at the current digit.
    pub(crate) fn scan_number(&mut self) -> Token {
        let mut lexeme = String::new();

        while let Some(grapheme) = self.cursor.current() {
            if !is_digit(grapheme) {
                break;
            }
            lexeme.push_str(grapheme);
            self.cursor.advance();
        }

        if self.cursor.current() == Some(".") {
            lexeme.push('.');
            self.cursor.advance();

            while let Some(grapheme) = self.cursor.current() {
                if !is_digit(grapheme) {
                    break;
                }
                lexeme.push_str(grapheme);
                self.cursor.advance();
            }
        }

        self.token_at_start(TokenKind::Number(lexeme))
    }
}
