// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, ValueEnum};
use elemental_words::{OutputConfig, OutputFormat, SearchLimits};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "elemental",
    about = "Spell words with chemical element symbols",
    version
)]
pub struct Cli {
    /// Words to segment. Without any, words are read from stdin, one per line.
    pub words: Vec<String>,

    /// JSON symbol table to use instead of the periodic table
    #[arg(long, env = "ELEMENTAL_TABLE")]
    pub table: Option<PathBuf>,

    /// Placed between the labels of one form
    #[arg(long, default_value = ", ")]
    pub separator: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Give up on a word after this many search steps
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Give up on a word whose search stack grows beyond this depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print search statistics after each word
    #[arg(long)]
    pub stats: bool,

    /// Do not prompt for input, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_steps: self.max_steps,
            max_depth: self.max_depth,
        }
    }

    /// Output settings; `interactive` says whether stdin is a terminal.
    pub fn output_config(&self, interactive: bool) -> OutputConfig {
        OutputConfig {
            separator: self.separator.clone(),
            prompt: interactive && !self.no_prompt,
            show_statistics: self.stats,
            format: match self.format {
                Format::Text => OutputFormat::Text,
                Format::Json => OutputFormat::Json,
            },
        }
    }
}
