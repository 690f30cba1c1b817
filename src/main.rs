// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `elemental`: print every way to spell a word with chemical element symbols.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use elemental_words::session::{report_word, run_session};
use elemental_words::{Segmenter, SymbolTable};
use std::io::{self, IsTerminal};

fn init_tracing(cli: &Cli) {
    // --quiet silences everything; --verbose honours RUST_LOG or shows debug;
    // otherwise only warnings, so logs never crowd out the forms on stdout.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let table = match &cli.table {
        Some(path) => SymbolTable::from_json_path(path)
            .with_context(|| format!("loading symbol table {}", path.display()))?,
        None => SymbolTable::periodic(),
    };
    let segmenter = Segmenter::new(table);
    let limits = cli.limits();

    let stdin = io::stdin();
    let config = cli.output_config(stdin.is_terminal());
    let mut out = io::stdout().lock();

    if cli.words.is_empty() {
        run_session(stdin.lock(), &mut out, &segmenter, &limits, &config)
            .context("reading words from stdin")?;
    } else {
        for word in &cli.words {
            report_word(&mut out, &segmenter, word, &limits, &config)
                .context("writing results")?;
        }
    }
    Ok(())
}
