// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! The segmentation search itself never fails; these errors belong to the
//! direct symbol-table entry points, table construction, and bounded search.

use std::path::PathBuf;
use thiserror::Error;

/// A direct lookup was made with a code that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid code: {code:?}")]
    InvalidCode { code: String },
}

/// Building a symbol table failed.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("codes must contain at least one character")]
    EmptyCode,

    /// Two entries collapse to the same key once upper-cased.
    #[error("duplicate code: {code:?}")]
    DuplicateCode { code: String },

    #[error("could not read symbol table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed symbol table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A bounded search gave up before exhausting the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search exceeded its budget of {limit} steps")]
    StepBudgetExceeded { limit: u64 },

    #[error("search exceeded the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}
