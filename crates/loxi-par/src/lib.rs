//! loxi-par - Recursive descent parser for Lox.
//!
//! The parser consumes the scanner's token stream and produces one entry
//! per attempted statement: the parsed [`Stmt`], or the [`ParseError`]
//! that stopped it. Errors never stop the parse; after each one the parser
//! synchronizes to the next statement boundary and keeps going, so a
//! single pass reports every statement-level problem in the input.
//!
//! # Grammar
//!
//! ```text
//! program     -> statement*
//! statement   -> printStmt | exprStmt
//! printStmt   -> "print" expression ";"
//! exprStmt    -> expression ";"
//! expression  -> equality
//! equality    -> comparison ( ("==" | "!=") comparison )*
//! comparison  -> term       ( ("<" | "<=" | ">" | ">=") term )*
//! term        -> factor     ( ("-" | "+") factor )*
//! factor      -> unary      ( ("/" | "*") unary )*
//! unary       -> ("!" | "-") unary | primary
//! primary     -> NUMBER | STRING | "true" | "false" | "nil"
//!              | "(" expression ")"
//! ```
//!
//! All binary productions are left-associative: `1 - 2 - 3` parses as
//! `(1 - 2) - 3`.
//!
//! ```
//! use loxi_lex::scan;
//! use loxi_par::parse;
//!
//! let (tokens, _) = scan("print 1 + 2;");
//! let statements = parse(tokens);
//! assert_eq!(statements.len(), 1);
//! assert!(statements[0].is_ok());
//! ```

mod ast;
mod edge_cases;
mod error;
mod expr;
mod stmt;

pub use ast::{BinaryExpr, Expr, Literal, Stmt, UnaryExpr};
pub use error::{ParseContext, ParseError};

use loxi_lex::{Token, TokenKind};
use loxi_util::Span;

/// Parses a token stream into statements.
///
/// Returns one entry per attempted statement, in source order. Recovery
/// happens only between statements: after an error, tokens are discarded
/// up to the next statement boundary before the next attempt.
pub fn parse(tokens: Vec<Token>) -> Vec<Result<Stmt, ParseError>> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser over a token stream.
///
/// Holds a position cursor with one-token lookahead. The stream always
/// ends with `Eof` and the cursor never moves past it.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// The scanner terminates every stream with `Eof`; a hand-built stream
    /// without one gets the sentinel appended so the cursor cannot run off
    /// the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let span = tokens.last().map(|t| t.span).unwrap_or(Span::point(1, 1));
            tokens.push(Token::new(TokenKind::Eof, span));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses statements until the stream is exhausted, synchronizing
    /// after every error.
    pub fn parse_program(&mut self) -> Vec<Result<Stmt, ParseError>> {
        let mut results = Vec::new();
        while !self.is_at_end() {
            let result = self.parse_statement();
            let failed = result.is_err();
            results.push(result);
            if failed {
                self.synchronize();
            }
        }
        results
    }

    /// Discards tokens until a statement boundary.
    ///
    /// Stops before a statement keyword (it becomes the next statement's
    /// first token), after a consumed `;`, or at end of input.
    pub(crate) fn synchronize(&mut self) {
        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// The token under the cursor.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// True when the cursor sits on `Eof`.
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Consumes and returns the current token. At `Eof` the cursor stays
    /// put and `Eof` is returned again.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    /// Consumes and returns the current token if its kind is in `kinds`.
    pub(crate) fn match_operator(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.advance())
        } else {
            None
        }
    }
}
