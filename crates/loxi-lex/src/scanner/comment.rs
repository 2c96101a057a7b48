//! Whitespace and comment skipping.

use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips inline whitespace, line terminators, and `//` comments.
    ///
    /// Called before every token. Inline whitespace is a space, tab, or a
    /// bare carriage return; the cursor handles line terminators itself.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                Some(" ") | Some("\t") | Some("\r") | Some("\n") | Some("\r\n") => {
                    self.cursor.advance();
                }
                Some("/") if self.cursor.peek(1) == Some("/") => {
                    self.skip_line_comment();
                }
                _ => return,
            }
        }
    }

    /// Skips a `//` comment up to and including its line terminator, or to
    /// end of input.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while let Some(grapheme) = self.cursor.current() {
            let terminator = grapheme == "\n" || grapheme == "\r\n";
            self.cursor.advance();
            if terminator {
                return;
            }
        }
    }
}
