//! Tick-based cooperative scheduler
//!
//! A two-state machine driven by timestamps, so it runs the same on a
//! hardware timer, an RTOS tick or a mock clock:
//!
//! ```text
//!          elapsed >= interval
//!   Idle ───────────────────────▶ Sampling
//!    ▲                               │
//!    └───────── cycle complete ──────┘
//! ```
//!
//! The interval is measured from the end of the previous cycle, not from a
//! fixed grid. Each cycle may therefore start up to one poll period late,
//! and that lateness is not compensated.
//!
//! [`Scheduler::poll`] follows the `nb` convention: `WouldBlock` while the
//! interval has not elapsed, `Ok(())` once a cycle should run.

use core::convert::Infallible;

use crate::time::Timestamp;

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the interval to elapse
    Idle,
    /// A cycle is in progress
    Sampling,
}

/// Fixed-interval scheduler
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval_ms: u64,
    last_fire: Timestamp,
    state: SchedulerState,
    cycles: u64,
}

impl Scheduler {
    /// Scheduler whose first cycle is due `interval_ms` after boot
    pub fn new(interval_ms: u64) -> Self {
        Self::starting_at(interval_ms, 0)
    }

    /// Scheduler whose first cycle is due `interval_ms` after `start`
    pub fn starting_at(interval_ms: u64, start: Timestamp) -> Self {
        Self {
            interval_ms,
            last_fire: start,
            state: SchedulerState::Idle,
            cycles: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of cycles started so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Time left before the next cycle is due
    pub fn remaining_ms(&self, now: Timestamp) -> u64 {
        self.interval_ms
            .saturating_sub(now.saturating_sub(self.last_fire))
    }

    /// Check whether a cycle should start at `now`
    ///
    /// Moves to `Sampling` and returns `Ok(())` when due. While a cycle is
    /// already in progress this keeps returning `Ok(())` until
    /// [`complete`](Self::complete) is called.
    pub fn poll(&mut self, now: Timestamp) -> nb::Result<(), Infallible> {
        match self.state {
            SchedulerState::Sampling => Ok(()),
            SchedulerState::Idle if now.saturating_sub(self.last_fire) >= self.interval_ms => {
                self.state = SchedulerState::Sampling;
                self.cycles += 1;
                Ok(())
            }
            SchedulerState::Idle => Err(nb::Error::WouldBlock),
        }
    }

    /// Finish the running cycle at `now` and return to `Idle`
    ///
    /// The next interval is measured from `now`.
    pub fn complete(&mut self, now: Timestamp) {
        if self.state == SchedulerState::Sampling {
            self.last_fire = now;
            self.state = SchedulerState::Idle;
        }
    }
}
