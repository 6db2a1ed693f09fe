//! Leaderboard seam.
//!
//! The engine hands the final `GameRecord` to a sink exactly once per run.
//! Storage (device or remote) is the sink's concern.

use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use netcatch_core::state::GameRecord;

/// Receives completed runs.
pub trait LeaderboardSink: Send {
    fn submit(&mut self, record: &GameRecord);
}

/// In-memory sink whose clones share one record list.
#[derive(Debug, Clone, Default)]
pub struct SharedLeaderboard {
    records: Arc<Mutex<Vec<GameRecord>>>,
}

impl SharedLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All submitted records, in submission order.
    pub fn records(&self) -> Vec<GameRecord> {
        self.lock().clone()
    }

    /// Highest-scoring record so far.
    pub fn best(&self) -> Option<GameRecord> {
        self.lock().iter().max_by_key(|record| record.score).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes never leave the list half-written, so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, Vec<GameRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| {
            warn!("leaderboard lock poisoned; recovering records");
            poisoned.into_inner()
        })
    }
}

impl LeaderboardSink for SharedLeaderboard {
    fn submit(&mut self, record: &GameRecord) {
        self.lock().push(record.clone());
    }
}
