// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore state
//! automatically on backtracking.
//!
//! # Architecture
//!
//! The engine keeps an explicit stack of predicate execution states instead
//! of recursing, so the depth of a search is limited only by memory (and by
//! [`SearchLimits::max_depth`] when set). Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent entry with choices left
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use elemental_words::context::SegmentationContext;
//! use elemental_words::engine::EngineBuilder;
//! use elemental_words::predicates::{ExtendPartitionPredicate, FailPredicate, RecordPartitionPredicate};
//! use elemental_words::SymbolTable;
//!
//! let table = SymbolTable::periodic();
//! let mut ctx = SegmentationContext::new(&table, "Bacon");
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ExtendPartitionPredicate::new()))
//!     .add(Box::new(RecordPartitionPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Fail forces every alternative to be explored, then the engine is exhausted.
//! assert!(engine.search(&mut ctx).unwrap().is_none());
//! assert_eq!(ctx.partitions().len(), 3);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::config::SearchLimits;
use crate::context::SegmentationContext;
use crate::error::SearchError;
use crate::state::Counters;
use tracing::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    limits: SearchLimits,

    /// Set when the last call to `search` suspended.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create an engine over `predicates`, which must end with a terminal
    /// predicate. Use [`EngineBuilder`] to have that checked by the compiler.
    pub(crate) fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            limits: SearchLimits::unlimited(),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Bound the search. Exceeding a limit aborts `search` with an error.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Ok(Some(engine))` if suspended; calling `search` again resumes by
    ///   backtracking into the next alternative
    /// - `Ok(None)` if exhausted: every alternative has been explored
    /// - `Err(_)` if a [`SearchLimits`] bound was exceeded
    ///
    /// Solutions are reported through side effects on `ctx`, not through the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without failing or
    /// suspending, or if `retry_pred` returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SegmentationContext<'_>) -> Result<Option<Self>, SearchError> {
        if self.suspended {
            self.suspended = false;
            self.backtrack();
        } else {
            self.stack.clear();
            if self.predicates.is_empty() {
                return Ok(None);
            }
            self.push_entry(0, 0, ctx)?;
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return Ok(None);
            };

            // Undo whatever the previous attempt from this entry changed.
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.count_step()?;
                self.try_count += 1;
                ctx.statistics.increment_counter(Counters::Tries);
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(
                    predicate = self.predicates[pred_idx].name(),
                    round,
                    ?result,
                    "try"
                );

                match result {
                    PredicateResult::Success => self.push_entry(pred_idx + 1, 0, ctx)?,
                    PredicateResult::SuccessSamePredicate => {
                        self.push_entry(pred_idx, round + 1, ctx)?
                    }
                    PredicateResult::Failure | PredicateResult::Choices(0) => self.backtrack(),
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Ok(Some(self));
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;

                self.count_step()?;
                self.retry_count += 1;
                ctx.statistics.increment_counter(Counters::Retries);
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);
                trace!(
                    predicate = self.predicates[pred_idx].name(),
                    round,
                    choice,
                    ?result,
                    "retry"
                );

                match result {
                    PredicateResult::Success => self.push_entry(pred_idx + 1, 0, ctx)?,
                    PredicateResult::SuccessSamePredicate => {
                        self.push_entry(pred_idx, round + 1, ctx)?
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push an entry for `predicate_index` at `round`.
    fn push_entry(
        &mut self,
        predicate_index: usize,
        round: usize,
        ctx: &SegmentationContext<'_>,
    ) -> Result<(), SearchError> {
        if predicate_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }
        if let Some(limit) = self.limits.max_depth {
            if self.stack.len() >= limit {
                return Err(SearchError::DepthLimitExceeded { limit });
            }
        }

        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
        Ok(())
    }

    /// Drop the top entry and every deterministic entry beneath it, leaving
    /// the most recent choice point (if any) on top.
    fn backtrack(&mut self) {
        self.stack.pop();
        while matches!(self.stack.last(), Some(entry) if !entry.in_choice_mode) {
            self.stack.pop();
        }
    }

    fn count_step(&self) -> Result<(), SearchError> {
        match self.limits.max_steps {
            Some(limit) if self.try_count + self.retry_count >= limit => {
                Err(SearchError::StepBudgetExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program is guaranteed to end with a
/// [`TerminalPredicate`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// End the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
