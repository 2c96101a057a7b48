//! loxi-util - Foundation types shared by every interpreter phase.
//!
//! This crate holds the pieces that the scanner, parser, evaluator, and
//! driver all agree on:
//!
//! - [`span::Span`] - source locations as 1-based, inclusive line/column
//!   rectangles
//! - [`diagnostic`] - severity levels, renderable diagnostics, and a
//!   collecting [`diagnostic::Handler`]
//! - [`float`] - the single number-rendering rule used by both the AST
//!   printer and runtime values

pub mod diagnostic;
pub mod float;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level, SourceSnippet};
pub use span::Span;
