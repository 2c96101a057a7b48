//! Loxi CLI - run a Lox script or start an interactive prompt.
//!
//! With a script argument the file runs once and the process exits
//! nonzero if the run produced any error. Without one, an interactive
//! prompt reads lines from stdin until EOF; an empty line is a no-op,
//! every other line goes through the full pipeline, and EOF exits
//! cleanly.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxi_drv::{render_errors, run_source};

/// Loxi - a tree-walking interpreter for the Lox language
#[derive(Parser, Debug)]
#[command(name = "loxi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tree-walking interpreter for the Lox language", long_about = None)]
struct Cli {
    /// Script to run; without it, an interactive prompt starts
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXI_VERBOSE")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run_file(path: &Path) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!(path = %path.display(), "running script");

    let outcome = run_source(&source, |line| println!("{line}"));
    if !outcome.is_clean() {
        eprint!("{}", render_errors(&outcome, &source));
        std::process::exit(1);
    }
    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: a clean exit.
            return Ok(());
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }

        let outcome = run_source(line, |out| println!("{out}"));
        if !outcome.is_clean() {
            eprint!("{}", render_errors(&outcome, line));
        }
    }
}
