//! Trailing-debounce scheduler for whole-board writes.
//!
//! # Responsibility
//! - Hold at most one pending write and the snapshot it should carry.
//! - Release the snapshot once the quiet period elapses with no newer
//!   change.
//!
//! # Invariants
//! - A new `schedule` replaces the pending write wholesale; the old
//!   snapshot and deadline are both discarded.
//! - At most one snapshot is ever pending; writes never queue up.
//! - Time is an explicit argument, so release order is deterministic under
//!   test.

use std::time::{Duration, Instant};

use crate::model::board::BoardSnapshot;

/// Quiet period a board must stay unchanged before its state is written.
pub const SAVE_QUIET_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
struct PendingWrite {
    due_at: Instant,
    snapshot: BoardSnapshot,
}

/// Single-slot trailing debouncer over board snapshots.
#[derive(Debug, Clone)]
pub struct WriteDebouncer {
    quiet_period: Duration,
    pending: Option<PendingWrite>,
}

impl Default for WriteDebouncer {
    fn default() -> Self {
        Self::new(SAVE_QUIET_PERIOD)
    }
}

impl WriteDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending write, if any.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Schedules `snapshot` to be written once the quiet period elapses.
    ///
    /// Any previously pending write is replaced, deadline included.
    pub fn schedule(&mut self, snapshot: BoardSnapshot, now: Instant) {
        self.pending = Some(PendingWrite {
            due_at: now + self.quiet_period,
            snapshot,
        });
    }

    /// Drops the pending write without releasing it.
    ///
    /// Returns whether one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Releases the pending snapshot if its deadline has passed.
    ///
    /// The slot is cleared on release; calling again without a new
    /// `schedule` yields `None`.
    pub fn take_due(&mut self, now: Instant) -> Option<BoardSnapshot> {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |pending| now >= pending.due_at);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.snapshot)
    }
}
