// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendPartitionPredicate - places the next code of the partition.
//!
//! Round `r` places the `r`-th code. At each round the admissible codes at
//! the current position become the choices, shortest first. Once the word is
//! covered the predicate succeeds and the program moves on to recording.
//! A position with no admissible code fails, which prunes that branch.

use crate::context::{Candidate, SegmentationContext};
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

#[derive(Debug, Default)]
pub struct ExtendPartitionPredicate {
    /// Admissible codes per round, along the current path.
    candidates: Vec<Vec<Candidate>>,
}

impl ExtendPartitionPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for ExtendPartitionPredicate {
    fn try_pred(&mut self, ctx: &mut SegmentationContext<'_>, round: usize) -> PredicateResult {
        if ctx.at_end() {
            return PredicateResult::Success;
        }

        let candidates = ctx.admissible_codes();
        if candidates.is_empty() {
            ctx.statistics.increment_counter(Counters::DeadEnds);
            return PredicateResult::Failure;
        }

        // Rounds beyond this one belong to an abandoned path.
        self.candidates.truncate(round);
        let n = candidates.len();
        self.candidates.push(candidates);
        PredicateResult::Choices(n)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SegmentationContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        match self
            .candidates
            .get(round)
            .and_then(|candidates| candidates.get(choice))
        {
            Some(&candidate) => {
                ctx.place(candidate);
                PredicateResult::SuccessSamePredicate
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "ExtendPartition"
    }
}
