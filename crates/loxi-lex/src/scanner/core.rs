//! Core scanner implementation.

use loxi_util::Span;

use crate::classify;
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::token::{Token, TokenKind};

/// Scans an entire source string.
///
/// Returns every token in source order, ending with `Eof`, along with the
/// errors encountered along the way. The token stream is best-effort: an
/// unexpected character is skipped, an unterminated string produces no
/// token, and scanning continues either way.
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, scanner.into_errors())
}

/// Scanner for Lox source text.
///
/// Produces tokens on demand via [`Scanner::next_token`]. Lexical errors
/// accumulate on the scanner instead of stopping it.
pub struct Scanner<'a> {
    /// Grapheme cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Errors found so far, in source order.
    pub(crate) errors: Vec<ScanError>,

    /// Line where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            token_line: 1,
            token_column: 1,
        }
    }

    /// Returns the next token.
    ///
    /// Whitespace and comments are skipped first, then the scanner
    /// dispatches on the current grapheme. At end of input this returns
    /// `Eof`, and it keeps returning `Eof` with the same span on every
    /// further call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            self.token_line = self.cursor.line();
            self.token_column = self.cursor.column();

            let Some(grapheme) = self.cursor.current() else {
                return Token::new(
                    TokenKind::Eof,
                    Span::point(self.token_line, self.token_column),
                );
            };

            match grapheme {
                "(" => return self.fixed_token(TokenKind::LeftParen),
                ")" => return self.fixed_token(TokenKind::RightParen),
                "{" => return self.fixed_token(TokenKind::LeftBrace),
                "}" => return self.fixed_token(TokenKind::RightBrace),
                "," => return self.fixed_token(TokenKind::Comma),
                "." => return self.fixed_token(TokenKind::Dot),
                "-" => return self.fixed_token(TokenKind::Minus),
                "+" => return self.fixed_token(TokenKind::Plus),
                ";" => return self.fixed_token(TokenKind::Semicolon),
                "*" => return self.fixed_token(TokenKind::Star),
                // A `//` comment was already skipped above, so this is a
                // bare slash.
                "/" => return self.fixed_token(TokenKind::Slash),
                "!" => return self.scan_bang(),
                "=" => return self.scan_equal(),
                "<" => return self.scan_less(),
                ">" => return self.scan_greater(),
                "\"" => {
                    if let Some(token) = self.scan_string() {
                        return token;
                    }
                    // Unterminated: the error is recorded and the cursor
                    // sits at end of input, so the loop yields Eof.
                }
                g if classify::is_digit(g) => return self.scan_number(),
                g if classify::is_ident_start(g) => return self.scan_identifier(),
                g => {
                    self.errors.push(ScanError::UnexpectedCharacter {
                        grapheme: g.to_string(),
                        span: Span::point(self.token_line, self.token_column),
                    });
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consumes errors accumulated so far.
    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }

    /// Consumes one grapheme and builds a fixed single-character token at
    /// the recorded start position.
    pub(crate) fn fixed_token(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token_at_start(kind)
    }

    /// Builds a token at the recorded start position, deriving its width
    /// from the kind's lexeme.
    pub(crate) fn token_at_start(&self, kind: TokenKind) -> Token {
        Token::single_line(kind, self.token_line, self.token_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_just_eof() {
        let (tokens, errors) = scan("");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Eof, Span::point(1, 1)));
    }

    #[test]
    fn test_single_char_tokens() {
        let (tokens, errors) = scan("(){},.-+;*/");
        assert!(errors.is_empty());
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans_advance_per_column() {
        let (tokens, _) = scan("+ -");
        assert_eq!(tokens[0].span, Span::single_line(1, 1, 1));
        assert_eq!(tokens[1].span, Span::single_line(1, 3, 3));
        assert_eq!(tokens[2].span, Span::point(1, 4));
    }

    #[test]
    fn test_unexpected_character_is_reported_and_skipped() {
        let (tokens, errors) = scan("1 @ 2");
        assert_eq!(
            errors,
            vec![ScanError::UnexpectedCharacter {
                grapheme: "@".into(),
                span: Span::point(1, 3),
            }]
        );
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number("1".into()),
                TokenKind::Number("2".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_next_token_past_eof_repeats_eof() {
        let mut scanner = Scanner::new("x");
        let first = scanner.next_token();
        assert_eq!(first.kind, TokenKind::Identifier("x".into()));

        let eof = scanner.next_token();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(scanner.next_token(), eof);
        assert_eq!(scanner.next_token(), eof);
    }

    #[test]
    fn test_tokens_on_multiple_lines() {
        let (tokens, errors) = scan("1\n22\n333");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].span, Span::single_line(1, 1, 1));
        assert_eq!(tokens[1].span, Span::single_line(2, 1, 2));
        assert_eq!(tokens[2].span, Span::single_line(3, 1, 3));
    }
}
