//! # Checkpoint Table
//!
//! Per-network mapping of block height to expected block hash, plus
//! aggregate metadata used only for sync-progress estimation. The table is
//! read-only after construction; enforcement against alternate chains is
//! the consensus collaborator's job, this module only holds and serves it.

use std::collections::BTreeMap;

use crate::hash::BlockHash;

/// Hardcoded (height, hash) assertions about the canonical chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointTable {
    /// Ordered height → expected block hash.
    checkpoints: BTreeMap<u32, BlockHash>,
    /// Unix timestamp of the last checkpoint block.
    pub last_checkpoint_time: u64,
    /// Total transactions between genesis and the last checkpoint.
    pub transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint.
    ///
    /// Estimation data only; must never affect validation correctness.
    pub estimated_transactions_per_day: u32,
}

impl CheckpointTable {
    /// Builds a table from literal (height, hash) entries.
    pub fn new(
        entries: impl IntoIterator<Item = (u32, BlockHash)>,
        last_checkpoint_time: u64,
        transactions_at_last_checkpoint: u64,
        estimated_transactions_per_day: u32,
    ) -> Self {
        Self {
            checkpoints: entries.into_iter().collect(),
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            estimated_transactions_per_day,
        }
    }

    /// The expected block hash at `height`, if checkpointed.
    pub fn lookup(&self, height: u32) -> Option<BlockHash> {
        self.checkpoints.get(&height).copied()
    }

    /// The highest checkpointed height, if any.
    pub fn latest_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Number of checkpoint entries.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whether the table holds no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Iterates entries in ascending height order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, BlockHash)> + '_ {
        self.checkpoints.iter().map(|(h, hash)| (*h, *hash))
    }
}
