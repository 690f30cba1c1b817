// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, or offer choices.
//!
//! # Example
//!
//! ```
//! use elemental_words::engine::{Predicate, PredicateResult};
//! use elemental_words::context::SegmentationContext;
//!
//! #[derive(Debug)]
//! struct TwoWays;
//!
//! impl Predicate for TwoWays {
//!     fn try_pred(&mut self, _ctx: &mut SegmentationContext<'_>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         _ctx: &mut SegmentationContext<'_>,
//!         _round: usize,
//!         _choice: usize,
//!     ) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWays"
//!     }
//! }
//! ```

use crate::context::SegmentationContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Lets one predicate run once per placed code.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that can end a program: it never returns `Success`.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// these, so every built program ends by failing or suspending.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Choices(n): engine calls `retry_pred` for choice 0, 1, ... in turn,
///    rewinding the trail before each one
/// 4. If Failure: engine backtracks to the most recent open choice point
///
/// State changes made through the context are recorded on the trail, so a
/// predicate never has to undo its own work.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SegmentationContext<'_>, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// Must not return `Choices` or `Suspend`.
    ///
    /// The trail has already been rewound to the state before this choice was tried.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SegmentationContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Only predicates that return Choices are ever retried.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
