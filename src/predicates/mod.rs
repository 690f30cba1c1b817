// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! A segmentation program is
//! `ExtendPartition -> RecordPartition -> (Fail | Suspend)`:
//!
//! - `extend`: [`ExtendPartitionPredicate`] places one code per round until
//!   the word is covered
//! - `record`: [`RecordPartitionPredicate`] stores the completed partition
//! - Built-in terminals: [`FailPredicate`] forces exhaustive enumeration,
//!   [`SuspendPredicate`] hands each partition back to the caller

pub mod extend;
pub mod record;

pub use extend::ExtendPartitionPredicate;
pub use record::RecordPartitionPredicate;

use crate::context::SegmentationContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack into every remaining
/// alternative. Ending a program with it enumerates the whole search space.
///
/// # Example
///
/// ```
/// use elemental_words::context::SegmentationContext;
/// use elemental_words::engine::EngineBuilder;
/// use elemental_words::predicates::{ExtendPartitionPredicate, FailPredicate};
/// use elemental_words::SymbolTable;
///
/// let table = SymbolTable::periodic();
/// let mut ctx = SegmentationContext::new(&table, "Cob");
/// let engine = EngineBuilder::new()
///     .add(Box::new(ExtendPartitionPredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// let result = engine.search(&mut ctx).unwrap();
/// assert!(result.is_none()); // Exhausted - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SegmentationContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Returns control to the caller with the search state intact. Searching
/// again resumes from the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SegmentationContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
