// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Restores state via the trail on backtracking
//! - Suspends and resumes

mod common;

use common::reference_table;
use elemental_words::context::SegmentationContext;
use elemental_words::engine::{EngineBuilder, Predicate, PredicateResult};
use elemental_words::predicates::{
    ExtendPartitionPredicate, FailPredicate, RecordPartitionPredicate, SuspendPredicate,
};
use elemental_words::state::Counters;

/// Checks that every time the engine reaches it, the trailed state is
/// consistent: the tiles cover exactly the chars before the position.
#[derive(Debug, Default)]
struct StateProbe {
    visits: usize,
}

impl Predicate for StateProbe {
    fn try_pred(&mut self, ctx: &mut SegmentationContext<'_>, _round: usize) -> PredicateResult {
        self.visits += 1;
        let covered: String = ctx
            .state
            .tiles()
            .iter()
            .map(|tile| &ctx.word()[tile.start..tile.end])
            .collect();
        let expected: String = ctx.word().chars().take(ctx.state.position()).collect();
        assert_eq!(covered, expected);
        PredicateResult::Success
    }
}

#[test]
fn test_exhaustive_program_records_all_partitions() {
    let table = reference_table();
    let mut ctx = SegmentationContext::new(&table, "Bacon");
    let engine = EngineBuilder::new()
        .add(Box::new(ExtendPartitionPredicate::new()))
        .add(Box::new(RecordPartitionPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    assert_eq!(ctx.partitions().len(), 3);
    assert_eq!(ctx.statistics.get(Counters::Partitions), 3);

    // Everything placed was undone on the way out.
    assert_eq!(ctx.state.position(), 0);
    assert!(ctx.state.tiles().is_empty());
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_state_consistent_at_every_partition() {
    let table = reference_table();
    let mut ctx = SegmentationContext::new(&table, "Bacon");
    let engine = EngineBuilder::new()
        .add(Box::new(ExtendPartitionPredicate::new()))
        .add(Box::new(StateProbe::default()))
        .add(Box::new(RecordPartitionPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    assert_eq!(ctx.partitions().len(), 3);
}

#[test]
fn test_suspend_and_resume_one_partition_at_a_time() {
    let table = reference_table();
    let mut ctx = SegmentationContext::new(&table, "Bacon");
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(ExtendPartitionPredicate::new()))
            .add(Box::new(RecordPartitionPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut seen = 0;
    while let Some(e) = engine.take() {
        engine = e.search(&mut ctx).unwrap();
        if engine.is_some() {
            seen += 1;
            // Suspended with the partition still in place.
            assert_eq!(ctx.state.position(), 5);
            assert_eq!(ctx.partitions().len(), seen);
        }
    }
    assert_eq!(seen, 3);
}

#[test]
fn test_no_partition_for_unspellable_word() {
    let table = reference_table();
    let mut ctx = SegmentationContext::new(&table, "Bxq");
    let engine = EngineBuilder::new()
        .add(Box::new(ExtendPartitionPredicate::new()))
        .add(Box::new(RecordPartitionPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    assert!(ctx.partitions().is_empty());
    assert_eq!(ctx.statistics.get(Counters::DeadEnds), 1);
}

#[test]
fn test_statistics_count_engine_calls() {
    let table = reference_table();
    let mut ctx = SegmentationContext::new(&table, "H");
    let engine = EngineBuilder::new()
        .add(Box::new(ExtendPartitionPredicate::new()))
        .add(Box::new(RecordPartitionPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap().unwrap();
    // Extend (choices), Extend (at end), Record, Suspend; one retry to place "H".
    assert_eq!(engine.statistics(), (4, 1));
    assert_eq!(ctx.statistics.get(Counters::Tries), 4);
    assert_eq!(ctx.statistics.get(Counters::Retries), 1);
}
