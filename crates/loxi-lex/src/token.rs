//! Token model for the Lox language.
//!
//! A token pairs a [`TokenKind`] with the [`Span`] it occupies in the
//! source. Literal kinds carry their payload; numbers keep the raw lexeme
//! so that conversion to a double is the parser's job.

use loxi_util::Span;

/// The kind of a lexical token, including any literal payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Single-character punctuation and operators
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One- or two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    /// Name written by the programmer.
    Identifier(String),
    /// String literal body, verbatim, without the surrounding quotes.
    String(String),
    /// Number literal as it appeared in source; parsed to `f64` later.
    Number(String),

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input. Always the last token of a stream.
    Eof,
}

impl TokenKind {
    /// Canonical surface text of this token kind.
    ///
    /// Fixed kinds return their operator or keyword spelling, literal kinds
    /// return their payload, and `Eof` returns the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxi_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::GreaterEqual.lexeme(), ">=");
    /// assert_eq!(TokenKind::While.lexeme(), "while");
    /// assert_eq!(TokenKind::Number("123.".into()).lexeme(), "123.");
    /// assert_eq!(TokenKind::Eof.lexeme(), "");
    /// ```
    pub fn lexeme(&self) -> &str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier(text) => text,
            TokenKind::String(text) => text,
            TokenKind::Number(text) => text,
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "",
        }
    }
}

/// Looks up the keyword kind for an identifier's text.
///
/// Returns `None` when the text is an ordinary identifier.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "fun" => TokenKind::Fun,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A lexical token with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Builds a token from a kind and an explicit span.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Builds a token on a single line, deriving the span width from the
    /// kind's lexeme.
    ///
    /// All fixed-lexeme kinds and ASCII literal payloads get their exact
    /// width; `Eof` gets a width-one span at the position.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxi_lex::{Token, TokenKind};
    /// use loxi_util::Span;
    ///
    /// let token = Token::single_line(TokenKind::EqualEqual, 1, 4);
    /// assert_eq!(token.span, Span::single_line(1, 4, 5));
    /// ```
    pub fn single_line(kind: TokenKind, line: u32, column: u32) -> Self {
        let width = kind.lexeme().len().max(1) as u32;
        Token::new(kind, Span::single_line(line, column, column + width - 1))
    }
}
