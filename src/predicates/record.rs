// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordPartitionPredicate - stores a completed partition.
//!
//! Only reached after ExtendPartitionPredicate has covered the whole word, so
//! a partial tiling can never be recorded.

use crate::context::SegmentationContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(Debug)]
pub struct RecordPartitionPredicate;

impl Predicate for RecordPartitionPredicate {
    fn try_pred(&mut self, ctx: &mut SegmentationContext<'_>, _round: usize) -> PredicateResult {
        debug_assert!(ctx.at_end(), "recording a partial partition");
        ctx.record_partition();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordPartition"
    }
}
