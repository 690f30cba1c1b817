// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration for bounded searches and for printing results.

use serde::{Deserialize, Serialize};

/// Optional bounds on a single search.
///
/// The number of partitions can grow exponentially with word length, so a
/// caller facing untrusted input can cap the work done per word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of predicate calls (tries plus retries).
    pub max_steps: Option<u64>,

    /// Maximum number of live entries on the engine's work stack.
    /// A word of `n` chars needs at most `n + 3`.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.max_depth.is_none()
    }
}

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per partition, labels joined by the separator.
    #[default]
    Text,
    /// One JSON object per word.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Placed between the labels of one partition.
    pub separator: String,

    /// Print a prompt before reading each line.
    pub prompt: bool,

    /// Append search statistics to each report.
    pub show_statistics: bool,

    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prompt: true,
            show_statistics: false,
            format: OutputFormat::Text,
        }
    }
}
