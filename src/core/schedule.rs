use super::grid::CellIndex;
use fnv::FnvHashMap;
use std::time::Duration;

/// Pending "turn this cell off" events, keyed by cell, in simulation time.
///
/// Scheduling a cell that is already pending replaces its deadline, so a cell
/// re-lit before it expired stays lit for the full new duration.
#[derive(Clone, Debug, Default)]
pub struct DeactivationSchedule {
    pending: FnvHashMap<CellIndex, Duration>,
}

impl DeactivationSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, cell: CellIndex, at: Duration) {
        self.pending.insert(cell, at);
    }

    pub fn cancel(&mut self, cell: &CellIndex) -> bool {
        self.pending.remove(cell).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn deadline(&self, cell: &CellIndex) -> Option<Duration> {
        self.pending.get(cell).copied()
    }

    /// Remove every event due at or before `now`, appending its cell to `out`.
    pub fn drain_due(&mut self, now: Duration, out: &mut Vec<CellIndex>) {
        if self.pending.is_empty() {
            return;
        }
        self.pending.retain(|cell, at| {
            if *at <= now {
                out.push(*cell);
                false
            } else {
                true
            }
        });
    }
}
