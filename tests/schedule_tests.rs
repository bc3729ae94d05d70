// Host-side tests for the cell deactivation schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use crate::core::grid::CellIndex;
use crate::core::schedule::DeactivationSchedule;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn drain_due_returns_only_expired_cells() {
    let mut s = DeactivationSchedule::new();
    let a = CellIndex::new(0, 1, 2);
    let b = CellIndex::new(0, 3, 4);
    s.schedule(a, ms(100));
    s.schedule(b, ms(300));

    let mut out = Vec::new();
    s.drain_due(ms(99), &mut out);
    assert!(out.is_empty());

    s.drain_due(ms(100), &mut out);
    assert_eq!(out, vec![a]);
    assert_eq!(s.len(), 1);

    out.clear();
    s.drain_due(ms(1000), &mut out);
    assert_eq!(out, vec![b]);
    assert!(s.is_empty());
}

#[test]
fn rescheduling_a_cell_replaces_its_deadline() {
    let mut s = DeactivationSchedule::new();
    let cell = CellIndex::new(4, 0, 0);
    s.schedule(cell, ms(100));
    s.schedule(cell, ms(500));
    assert_eq!(s.len(), 1);
    assert_eq!(s.deadline(&cell), Some(ms(500)));

    let mut out = Vec::new();
    s.drain_due(ms(200), &mut out);
    assert!(out.is_empty(), "earlier deadline must not fire");
}

#[test]
fn cancel_all_drops_pending_events() {
    let mut s = DeactivationSchedule::new();
    for col in 0..10 {
        s.schedule(CellIndex::new(0, 0, col), ms(col as u64));
    }
    assert!(s.cancel(&CellIndex::new(0, 0, 3)));
    assert!(!s.cancel(&CellIndex::new(0, 0, 3)));
    s.cancel_all();
    assert!(s.is_empty());

    let mut out = Vec::new();
    s.drain_due(ms(10_000), &mut out);
    assert!(out.is_empty());
}
