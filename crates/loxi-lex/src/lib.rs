//! loxi-lex - Lexical analysis for Lox source text.
//!
//! The scanner turns a source string into a stream of positioned tokens.
//! Source text is traversed as extended grapheme clusters, so a `\r\n`
//! sequence is one line terminator and multi-codepoint characters inside
//! string literals never skew column tracking. The lexical classes
//! themselves (digits, letters, operators) are ASCII.
//!
//! Scanning never aborts: an unexpected character or an unterminated
//! string is recorded as a [`ScanError`] and scanning continues, so a
//! single pass can report every lexical problem in the input. The stream
//! always ends with an `Eof` token, and asking for more tokens after that
//! keeps returning `Eof` at the same position.
//!
//! ```
//! use loxi_lex::{scan, TokenKind};
//!
//! let (tokens, errors) = scan("print 1 + 2;");
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 6); // print, 1, +, 2, ;, Eof
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod classify;
pub mod cursor;
mod edge_cases;
pub mod error;
pub mod scanner;
pub mod token;

pub use error::ScanError;
pub use scanner::{scan, Scanner};
pub use token::{keyword_from_ident, Token, TokenKind};
