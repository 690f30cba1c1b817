// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The public segmentation API.
//!
//! A [`Segmenter`] holds a shared [`SymbolTable`] and runs one independent
//! search per word. Each search builds the program
//! `ExtendPartition -> RecordPartition -> Fail` and lets the engine explore
//! every tiling of the word, shortest code first.
//!
//! # Example
//!
//! ```
//! use elemental_words::Segmenter;
//!
//! let segmenter = Segmenter::periodic();
//! let forms = segmenter.find_segmentations("Cob");
//! assert_eq!(
//!     forms,
//!     vec![
//!         vec!["Carbon (C)", "Oxygen (O)", "Boron (B)"],
//!         vec!["Cobalt (Co)", "Boron (B)"],
//!     ]
//! );
//! ```

use crate::config::SearchLimits;
use crate::context::SegmentationContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::SearchError;
use crate::predicates::{
    ExtendPartitionPredicate, FailPredicate, RecordPartitionPredicate, SuspendPredicate,
};
use crate::state::{SearchStatistics, Tile};
use crate::symbols::{Label, SymbolTable};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One complete tiling of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// The matched substrings of the word, in their original case.
    codes: Vec<String>,
    labels: Vec<Label>,
}

impl Partition {
    fn from_tiles(table: &SymbolTable, word: &str, tiles: &[Tile]) -> Self {
        Self {
            codes: tiles
                .iter()
                .map(|tile| word[tile.start..tile.end].to_string())
                .collect(),
            labels: table.labels(tiles.iter().map(|tile| &tile.code)),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    /// Number of codes in the partition.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Every partition of one word, with the statistics of the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub word: String,
    /// In discovery order.
    pub partitions: Vec<Partition>,
    pub statistics: SearchStatistics,
}

impl Segmentation {
    fn empty(word: &str) -> Self {
        Self {
            word: word.to_string(),
            partitions: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// The label sequence of every partition.
    pub fn into_labels(self) -> Vec<Vec<Label>> {
        self.partitions
            .into_iter()
            .map(Partition::into_labels)
            .collect()
    }
}

/// Splits words into sequences of codes from a symbol table.
///
/// Cloning is cheap; clones share the table.
#[derive(Debug, Clone)]
pub struct Segmenter {
    table: Arc<SymbolTable>,
}

impl Segmenter {
    pub fn new(table: impl Into<Arc<SymbolTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// A segmenter over the chemical elements.
    pub fn periodic() -> Self {
        Self::new(SymbolTable::periodic())
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// All label sequences for `word`, one per distinct tiling.
    ///
    /// The empty word, and any word with no tiling, gives an empty result.
    pub fn find_segmentations(&self, word: &str) -> Vec<Vec<Label>> {
        self.segment(word).into_labels()
    }

    /// Like [`find_segmentations`](Self::find_segmentations), keeping the
    /// matched codes and the search statistics.
    pub fn segment(&self, word: &str) -> Segmentation {
        match self.segment_within(word, &SearchLimits::unlimited()) {
            Ok(segmentation) => segmentation,
            Err(err) => unreachable!("unbounded search reported {}", err),
        }
    }

    /// Segment `word`, giving up once `limits` are exceeded.
    pub fn segment_within(
        &self,
        word: &str,
        limits: &SearchLimits,
    ) -> Result<Segmentation, SearchError> {
        if word.is_empty() {
            return Ok(Segmentation::empty(word));
        }

        let mut ctx = SegmentationContext::new(&self.table, word);
        let engine = EngineBuilder::new()
            .add(Box::new(ExtendPartitionPredicate::new()))
            .add(Box::new(RecordPartitionPredicate))
            .terminal(Box::new(FailPredicate))
            .build()
            .with_limits(*limits);

        if let Err(err) = engine.search(&mut ctx) {
            debug!(word, %err, "search abandoned");
            return Err(err);
        }

        let statistics = SearchStatistics::new(&ctx.statistics);
        let partitions = ctx
            .partitions()
            .iter()
            .map(|tiles| Partition::from_tiles(&self.table, word, tiles))
            .collect::<Vec<_>>();

        debug!(
            word,
            partitions = partitions.len(),
            dead_ends = statistics.dead_ends,
            lookups = statistics.candidate_lookups,
            "segmented word"
        );

        Ok(Segmentation {
            word: word.to_string(),
            partitions,
            statistics,
        })
    }

    /// Lazily produce the partitions of `word`, in the same order as
    /// [`segment`](Self::segment).
    pub fn partitions<'a>(&'a self, word: &'a str) -> Partitions<'a> {
        let engine = (!word.is_empty()).then(|| {
            EngineBuilder::new()
                .add(Box::new(ExtendPartitionPredicate::new()))
                .add(Box::new(RecordPartitionPredicate))
                .terminal(Box::new(SuspendPredicate))
                .build()
        });
        Partitions {
            ctx: SegmentationContext::new(&self.table, word),
            engine,
        }
    }
}

/// Iterator over the partitions of one word.
///
/// Each call to `next` resumes the suspended search until the next partition
/// is recorded.
#[derive(Debug)]
pub struct Partitions<'a> {
    ctx: SegmentationContext<'a>,
    engine: Option<SearchEngine>,
}

impl Iterator for Partitions<'_> {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let engine = self.engine.take()?;
        // No limits are set, so the search cannot be abandoned.
        self.engine = engine.search(&mut self.ctx).ok().flatten();
        self.engine.as_ref()?;

        let tiles = self.ctx.pop_partition()?;
        Some(Partition::from_tiles(
            self.ctx.table(),
            self.ctx.word(),
            &tiles,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word() {
        let segmenter = Segmenter::periodic();
        assert!(segmenter.find_segmentations("").is_empty());
        assert!(segmenter.partitions("").next().is_none());
    }

    #[test]
    fn test_partition_keeps_original_case() {
        let segmenter = Segmenter::periodic();
        let segmentation = segmenter.segment("cOb");
        let codes: Vec<_> = segmentation
            .partitions
            .iter()
            .map(|p| p.codes().to_vec())
            .collect();
        assert_eq!(codes, vec![vec!["c", "O", "b"], vec!["cO", "b"]]);
    }

    #[test]
    fn test_statistics() {
        let segmenter = Segmenter::periodic();
        let segmentation = segmenter.segment("Bacon");
        assert_eq!(segmentation.statistics.partitions, 3);
        assert!(segmentation.statistics.candidate_lookups > 0);
        assert!(segmentation.statistics.retries >= 3);
    }

    #[test]
    fn test_lazy_partitions_match_eager() {
        let segmenter = Segmenter::periodic();
        let eager = segmenter.segment("Bacon").partitions;
        let lazy: Vec<_> = segmenter.partitions("Bacon").collect();
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_limits() {
        let segmenter = Segmenter::periodic();
        let limits = SearchLimits::unlimited().with_max_steps(3);
        assert_eq!(
            segmenter.segment_within("Bacon", &limits),
            Err(SearchError::StepBudgetExceeded { limit: 3 })
        );
        assert_eq!(
            segmenter.segment_within("Bacon", &SearchLimits::unlimited()),
            Ok(segmenter.segment("Bacon"))
        );
    }
}
