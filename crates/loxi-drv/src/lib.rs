//! loxi-drv - Driver shell for the Lox interpreter.
//!
//! The library runs one complete source string through the pipeline
//! (scan, parse, evaluate) and renders diagnostics; the binary adds the
//! file and prompt front ends on top.
//!
//! # Error policy
//!
//! Scanner and parser diagnostics are collected, not fatal, so one run
//! reports all of them. When any front-end diagnostic is present,
//! evaluation is **skipped entirely**: this driver never executes a
//! partial program. Evaluation itself fails fast on the first runtime
//! error.

use loxi_eval::{Interpreter, RuntimeError};
use loxi_lex::scan;
use loxi_par::parse;
use loxi_util::{Diagnostic, Handler, SourceSnippet};
use tracing::debug;

/// What happened when a source string was run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Scanner and parser diagnostics, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// The runtime error that stopped evaluation, if any.
    pub runtime_error: Option<RuntimeError>,
}

impl RunOutcome {
    /// True when the run produced no diagnostics and no runtime error.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.runtime_error.is_none()
    }
}

/// Runs one complete source string through scan, parse, and evaluate.
///
/// Each call is independent: there is no state shared between runs, so
/// the prompt loop calls this once per input line. `print` output goes to
/// `sink`, one call per line.
pub fn run_source<F: FnMut(&str)>(source: &str, sink: F) -> RunOutcome {
    let handler = Handler::new();

    let (tokens, scan_errors) = scan(source);
    debug!(tokens = tokens.len(), errors = scan_errors.len(), "scanned");
    for error in scan_errors {
        handler.emit(error.into_diagnostic());
    }

    let mut statements = Vec::new();
    for result in parse(tokens) {
        match result {
            Ok(statement) => statements.push(statement),
            Err(error) => handler.emit(error.into_diagnostic()),
        }
    }
    debug!(statements = statements.len(), "parsed");

    if handler.has_errors() {
        return RunOutcome {
            diagnostics: handler.diagnostics(),
            runtime_error: None,
        };
    }

    let mut interpreter = Interpreter::new(sink);
    let runtime_error = interpreter.run(&statements).err();
    debug!(ok = runtime_error.is_none(), "evaluated");

    RunOutcome {
        diagnostics: handler.diagnostics(),
        runtime_error,
    }
}

/// Renders an outcome's errors for the terminal: one block per
/// diagnostic, with a caret snippet into `source`, then the runtime
/// error if evaluation failed.
pub fn render_errors(outcome: &RunOutcome, source: &str) -> String {
    let mut out = String::new();

    for diagnostic in &outcome.diagnostics {
        out.push_str(&format!(
            "{diagnostic} at {span}\n",
            span = diagnostic.span
        ));
        if let Some(snippet) = SourceSnippet::from_source(source, diagnostic.span) {
            out.push_str(&snippet.format());
            out.push('\n');
        }
    }

    if let Some(error) = &outcome.runtime_error {
        out.push_str(&format!("error: {error}\n"));
    }

    out
}
