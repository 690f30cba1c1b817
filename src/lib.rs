// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spell words with chemical element symbols.
//!
//! Given a word, find every way to split it into consecutive, non-overlapping
//! substrings that are each a known code (an element symbol, compared without
//! regard to case), and report each split as the sequence of the codes'
//! labels. `"Bacon"` can be spelt three ways:
//!
//! ```
//! use elemental_words::Segmenter;
//!
//! let forms = Segmenter::periodic().find_segmentations("Bacon");
//! assert_eq!(forms.len(), 3);
//! assert_eq!(forms[0], ["Boron (B)", "Actinium (Ac)", "Oxygen (O)", "Nitrogen (N)"]);
//! ```
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Symbol table (immutable)
//!
//! Built once and shared, read-only, by every search:
//! - Upper-cased code -> label lookup
//! - Longest code length, which bounds the choices at each position
//!
//! ## Tier 2: Search state (mutable, per search)
//!
//! Owned by a single search and tracked on the trail:
//! - Trail - records state changes for backtracking
//! - Read position and the tiles placed so far
//!
//! # Search Algorithm
//!
//! The search is a program of three predicates run by a backtracking engine:
//!
//! 1. **ExtendPartitionPredicate**: offer every code that fits at the current
//!    position (shortest first), placing one per round
//! 2. **RecordPartitionPredicate**: once the word is covered, record the tiling
//! 3. **FailPredicate**: force backtracking into the next alternative
//!
//! The engine keeps its own stack rather than recursing, so long words cannot
//! overflow the call stack. Because each code is validated against the table
//! before it is placed, converting a recorded tiling to labels cannot fail.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod output;
pub mod predicates;
pub mod segmenter;
pub mod session;
pub mod state;
pub mod symbols;
pub mod trail;

// Re-export commonly used types
pub use config::{OutputConfig, OutputFormat, SearchLimits};
pub use error::{LookupError, SearchError, TableError};
pub use segmenter::{Partition, Segmentation, Segmenter};
pub use symbols::{Label, SymbolTable, ValidCode};
