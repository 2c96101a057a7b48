//! Grapheme cursor for traversing source code.
//!
//! The cursor walks a source string one extended grapheme cluster at a
//! time while tracking 1-based line/column positions. Treating `\r\n` as a
//! single cluster means a Windows line ending advances the line counter
//! exactly once, and a multi-codepoint character inside a string literal
//! occupies exactly one column.

use unicode_segmentation::UnicodeSegmentation;

/// A cursor over the grapheme clusters of a source string.
///
/// # Example
///
/// ```
/// use loxi_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current(), Some("a"));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some("b"));
/// ```
pub struct Cursor<'a> {
    /// The source, pre-segmented into grapheme clusters.
    graphemes: Vec<&'a str>,

    /// Index of the current cluster.
    index: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in graphemes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at line 1, column 1 of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            graphemes: source.graphemes(true).collect(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// The grapheme under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a str> {
        self.graphemes.get(self.index).copied()
    }

    /// The grapheme `offset` clusters ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use loxi_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(1), Some("b"));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        self.graphemes.get(self.index + offset).copied()
    }

    /// Returns true when every grapheme has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.graphemes.len()
    }

    /// Advances past the current grapheme, updating position tracking.
    ///
    /// The `"\n"` and `"\r\n"` clusters are line terminators: the line
    /// counter increments and the column resets to 1. Every other cluster,
    /// including a bare `"\r"`, advances the column by one. Does nothing at
    /// end of input.
    pub fn advance(&mut self) {
        let Some(grapheme) = self.current() else {
            return;
        };
        self.index += 1;
        if grapheme == "\n" || grapheme == "\r\n" {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the current grapheme if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxi_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(">=");
    /// cursor.advance();
    /// assert!(cursor.match_grapheme("="));
    /// assert!(!cursor.match_grapheme("="));
    /// ```
    pub fn match_grapheme(&mut self, expected: &str) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}
