//! Deferred butterfly insertion.
//!
//! Staggered spawns are queued with the epoch that issued them. The tick
//! drains due entries for the current epoch and silently discards any entry
//! whose epoch has been superseded by a state transition.

use netcatch_core::components::{Boss, Butterfly};
use netcatch_core::types::{Position, Velocity};

/// Everything needed to insert one butterfly into the world.
#[derive(Debug, Clone)]
pub struct ButterflyBlueprint {
    pub position: Position,
    pub velocity: Velocity,
    pub butterfly: Butterfly,
    pub boss: Option<Boss>,
}

#[derive(Debug, Clone)]
struct ScheduledSpawn {
    /// Session time (seconds) at which the butterfly is inserted.
    due_at: f64,
    epoch: u64,
    blueprint: ButterflyBlueprint,
}

/// Pending insertions, in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct SpawnQueue {
    pending: Vec<ScheduledSpawn>,
}

impl SpawnQueue {
    pub fn schedule(&mut self, due_at: f64, epoch: u64, blueprint: ButterflyBlueprint) {
        self.pending.push(ScheduledSpawn {
            due_at,
            epoch,
            blueprint,
        });
    }

    /// Remove and return every blueprint due at `now` for `epoch`, ordered by due time.
    /// Entries from other epochs are dropped.
    pub fn take_due(&mut self, now: f64, epoch: u64) -> Vec<ButterflyBlueprint> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.pending.len());

        for entry in self.pending.drain(..) {
            if entry.epoch != epoch {
                continue;
            }
            if entry.due_at <= now {
                due.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.pending = kept;

        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));
        due.into_iter().map(|entry| entry.blueprint).collect()
    }

    /// Number of pending entries still valid for `epoch`.
    pub fn pending_for(&self, epoch: u64) -> usize {
        self.pending.iter().filter(|e| e.epoch == epoch).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
