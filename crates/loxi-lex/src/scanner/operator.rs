//! Operator scanning.
//!
//! Two-character operators are matched before their one-character
//! prefixes: `>=` is one `GreaterEqual` token, never `Greater` then
//! `Equal` (maximal munch).

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans `!` or `!=`.
    pub(crate) fn scan_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_grapheme("=") {
            self.token_at_start(TokenKind::BangEqual)
        } else {
            self.token_at_start(TokenKind::Bang)
        }
    }

    /// Scans `=` or `==`.
    pub(crate) fn scan_equal(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_grapheme("=") {
            self.token_at_start(TokenKind::EqualEqual)
        } else {
            self.token_at_start(TokenKind::Equal)
        }
    }

    /// Scans `<` or `<=`.
    pub(crate) fn scan_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_grapheme("=") {
            self.token_at_start(TokenKind::LessEqual)
        } else {
            self.token_at_start(TokenKind::Less)
        }
    }

    /// Scans `>` or `>=`.
    pub(crate) fn scan_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_grapheme("=") {
            self.token_at_start(TokenKind::GreaterEqual)
        } else {
            self.token_at_start(TokenKind::Greater)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::scan;
    use crate::token::TokenKind;
    use loxi_util::Span;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_maximal_munch_greater_equal() {
        let (tokens, errors) = scan(">=");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::GreaterEqual);
        assert_eq!(tokens[0].span, Span::single_line(1, 1, 2));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            kinds("== != <= >="),
            vec![
                TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            kinds("= ! < >"),
            vec![
                TokenKind::Equal,
                TokenKind::Bang,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_adjacent_operators_split_greedily() {
        // `===` is `==` then `=`; `!==` is `!=` then `=`.
        assert_eq!(
            kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
        );
        assert_eq!(
            kinds("!=="),
            vec![TokenKind::BangEqual, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_column_after_two_char_operator() {
        let (tokens, _) = scan("<=1");
        assert_eq!(tokens[0].span, Span::single_line(1, 1, 2));
        assert_eq!(tokens[1].span, Span::single_line(1, 3, 3));
    }
}
