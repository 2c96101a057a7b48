//! Error and warning reporting infrastructure.
//!
//! Each interpreter phase defines its own typed error enum and converts it
//! into a [`Diagnostic`] for display. The [`Handler`] collects diagnostics
//! across phases so a single run can report several of them, and
//! [`SourceSnippet`] renders the offending source line with a caret under
//! the reported region.

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use loxi_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents evaluation.
    Error,
    /// A warning that does not prevent evaluation.
    Warning,
    /// Additional information about a diagnostic.
    Note,
    /// A suggestion for fixing an issue.
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and source location.
///
/// # Examples
///
/// ```
/// use loxi_util::diagnostic::{Diagnostic, Level};
/// use loxi_util::span::Span;
///
/// let diag = Diagnostic::error("unexpected character '@'", Span::point(1, 4));
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location the message points at.
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Handler for collecting diagnostics across phases.
///
/// # Examples
///
/// ```
/// use loxi_util::diagnostic::{Diagnostic, Handler};
/// use loxi_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit(Diagnostic::error("unterminated string literal", Span::point(2, 1)));
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any error-level diagnostics have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// All diagnostics recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drop all recorded diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// A source line with a highlighted range, for terminal display.
///
/// # Examples
///
/// ```
/// use loxi_util::diagnostic::SourceSnippet;
/// use loxi_util::span::Span;
///
/// let snippet = SourceSnippet::from_source("print 1 / 0;", Span::point(1, 9)).unwrap();
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line content.
    pub line: String,
    /// Line number (1-based).
    pub line_number: u32,
    /// Column where the highlight starts (1-based).
    pub start_column: u32,
    /// Column where the highlight ends (1-based, inclusive).
    pub end_column: u32,
}

impl SourceSnippet {
    /// Create a snippet from explicit parts.
    pub fn new(line: impl Into<String>, line_number: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Extract the snippet for a span's first line from full source text.
    ///
    /// Returns `None` when the span does not point into `source` (a dummy
    /// span, or a line number past the end of the text). For a multi-line
    /// span the highlight runs to the end of the first line.
    pub fn from_source(source: &str, span: Span) -> Option<SourceSnippet> {
        if span.line_start == 0 {
            return None;
        }
        let line = source.lines().nth(span.line_start as usize - 1)?;
        let line_width = line.chars().count().max(1) as u32;

        let end_column = if span.is_single_line() {
            span.column_end.min(line_width)
        } else {
            line_width
        };

        Some(SourceSnippet::new(
            line,
            span.line_start,
            span.column_start.min(line_width),
            end_column.max(span.column_start.min(line_width)),
        ))
    }

    /// Format the snippet: the numbered source line, then a caret line
    /// underlining the highlighted columns.
    pub fn format(&self) -> String {
        let gutter_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = gutter_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = gutter_width));
        for _ in 1..self.start_column {
            result.push(' ');
        }
        let underline = self.end_column.saturating_sub(self.start_column) + 1;
        for _ in 0..underline {
            result.push('^');
        }

        result
    }
}
