// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search mutable state, tracked on the trail.
//!
//! The state is the read position plus the tiles placed so far. Both are
//! changed only through [`PartitionState::place`], which records the old
//! values, so rewinding the trail removes a tile exactly when its subtree
//! has been exhausted.

pub mod statistics;

pub use statistics::{Counters, SearchStatistics, Statistics};

use crate::symbols::ValidCode;
use crate::trail::{Restore, Slot, Trail};

/// One code placed in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Byte offset where the code starts in the word.
    pub start: usize,
    /// Byte offset one past the end of the code.
    pub end: usize,
    pub code: ValidCode,
}

/// The partial partition: where we are and what has been placed.
#[derive(Debug, Default)]
pub struct PartitionState {
    /// Read position in chars.
    position: usize,
    tiles: Vec<Tile>,
}

impl PartitionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Tiles placed so far, left to right.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Append `tile`, covering `chars` characters, and advance the position.
    pub fn place(&mut self, trail: &mut Trail, tile: Tile, chars: usize) {
        trail.record_change(Slot::Depth, self.tiles.len());
        self.tiles.push(tile);
        trail.record_change(Slot::Position, self.position);
        self.position += chars;
    }
}

impl Restore for PartitionState {
    fn restore(&mut self, slot: Slot, old_value: usize) {
        match slot {
            Slot::Position => self.position = old_value,
            Slot::Depth => self.tiles.truncate(old_value),
        }
    }
}
