// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to search state is recorded on the trail as the slot that
//! changed and its previous value. Rewinding to a checkpoint replays the
//! entries newest-first, so state is restored in O(changes) without copying
//! anything up front.

/// Identifies one piece of trailed search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Read position in the word, in chars.
    Position,
    /// Number of tiles in the partial partition.
    Depth,
}

/// State that can be restored from trail entries.
pub trait Restore {
    /// Put `slot` back to `old_value`.
    fn restore(&mut self, slot: Slot, old_value: usize);
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: Slot,
    old_value: usize,
}

/// The trail: an undo log of state changes.
///
/// A checkpoint is just the trail length at some moment; see [`Trail::len`].
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `slot` is about to change from `old_value`.
    pub fn record_change(&mut self, slot: Slot, old_value: usize) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Undo every change recorded since `checkpoint`, newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to<R: Restore + ?Sized>(&mut self, checkpoint: usize, state: &mut R) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                state.restore(entry.slot, entry.old_value);
            }
        }
    }

    /// Current number of entries; usable as a checkpoint.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
