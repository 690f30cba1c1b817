// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the predicates as
//! the search runs.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};

#[derive(Debug, EnumCountMacro, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Complete partitions recorded.
    Partitions,
    /// Positions with no admissible code.
    DeadEnds,
    /// Substrings checked against the symbol table.
    CandidateLookups,
    /// Engine calls to `try_pred`.
    Tries,
    /// Engine calls to `retry_pred`.
    Retries,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Summary of one search, including engine step counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    pub partitions: u64,
    pub dead_ends: u64,
    pub candidate_lookups: u64,
    pub tries: u64,
    pub retries: u64,
}

impl SearchStatistics {
    pub fn new(counters: &Statistics) -> Self {
        Self {
            partitions: counters.get(Counters::Partitions),
            dead_ends: counters.get(Counters::DeadEnds),
            candidate_lookups: counters.get(Counters::CandidateLookups),
            tries: counters.get(Counters::Tries),
            retries: counters.get(Counters::Retries),
        }
    }
}
