//! Identifier and keyword scanning.

use crate::classify::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword starting at the current grapheme.
    ///
    /// Identifiers start with an ASCII letter or `_` and continue with
    /// letters, digits, or `_`. The finished text is looked up in the
    /// keyword table; on a miss it stays an identifier.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let mut text = String::new();

        while let Some(grapheme) = self.cursor.current() {
            if !is_ident_continue(grapheme) {
                break;
            }
            text.push_str(grapheme);
            self.cursor.advance();
        }

        let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier(text));
        self.token_at_start(kind)
    }
}
