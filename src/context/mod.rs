// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the shared table with per-search state.
//!
//! The SegmentationContext is the data structure threaded through the engine:
//! - the symbol table (immutable, borrowed, shared between searches)
//! - the word being segmented and its char boundaries
//! - the trail and the partial partition it protects
//! - statistics and the partitions recorded so far
//!
//! A context lives for exactly one search. Nothing in it is shared with
//! another search, so any number of searches may run concurrently against
//! the same table.

use crate::state::{Counters, PartitionState, Statistics, Tile};
use crate::symbols::SymbolTable;
use crate::trail::Trail;

/// A code that may be placed at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Length in chars.
    pub chars: usize,
    pub tile: Tile,
}

/// Search context for segmenting one word.
///
/// # Memory Model
///
/// ```text
/// SegmentationContext {
///     table: &SymbolTable,       // immutable, shared
///     trail: Trail,              // mutable, owned
///     state: PartitionState,     // mutable, owned
/// }
/// ```
#[derive(Debug)]
pub struct SegmentationContext<'a> {
    table: &'a SymbolTable,
    word: &'a str,

    /// Byte offset of every char boundary of `word`, including its end.
    boundaries: Vec<usize>,

    pub trail: Trail,
    pub state: PartitionState,
    pub statistics: Statistics,

    partitions: Vec<Vec<Tile>>,
}

impl<'a> SegmentationContext<'a> {
    pub fn new(table: &'a SymbolTable, word: &'a str) -> Self {
        let boundaries = word
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(word.len()))
            .collect();
        Self {
            table,
            word,
            boundaries,
            trail: Trail::new(),
            state: PartitionState::new(),
            statistics: Statistics::new(),
            partitions: Vec::new(),
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Length of the word in chars.
    pub fn word_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Whether the partial partition covers the whole word.
    pub fn at_end(&self) -> bool {
        self.state.position() >= self.word_len()
    }

    /// Codes that can be placed at the current position, shortest first.
    pub fn admissible_codes(&mut self) -> Vec<Candidate> {
        let position = self.state.position();
        let longest = self
            .table
            .max_code_len()
            .min(self.word_len().saturating_sub(position));

        let mut candidates = Vec::with_capacity(longest);
        for chars in 1..=longest {
            let start = self.boundaries[position];
            let end = self.boundaries[position + chars];
            self.statistics.increment_counter(Counters::CandidateLookups);
            if let Some(code) = self.table.validate(&self.word[start..end]) {
                candidates.push(Candidate {
                    chars,
                    tile: Tile { start, end, code },
                });
            }
        }
        candidates
    }

    /// Place `candidate` at the current position (trailed).
    pub fn place(&mut self, candidate: Candidate) {
        self.state
            .place(&mut self.trail, candidate.tile, candidate.chars);
    }

    /// Record a copy of the current partition as a complete result.
    pub fn record_partition(&mut self) {
        self.partitions.push(self.state.tiles().to_vec());
        self.statistics.increment_counter(Counters::Partitions);
    }

    /// Undo every state change made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }

    /// Partitions recorded so far, in discovery order.
    pub fn partitions(&self) -> &[Vec<Tile>] {
        &self.partitions
    }

    /// Remove and return the most recently recorded partition.
    pub fn pop_partition(&mut self) -> Option<Vec<Tile>> {
        self.partitions.pop()
    }

    pub fn into_partitions(self) -> Vec<Vec<Tile>> {
        self.partitions
    }
}
