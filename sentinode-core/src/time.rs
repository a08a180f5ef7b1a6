//! Time management for the node
//!
//! Provides the clock and pause abstractions the scheduler runs on:
//! - `MonotonicTime`: milliseconds since the node started (std)
//! - `FixedTime`: hand-driven clock for tests
//! - `ThreadPause`: idle pause backed by `thread::sleep` (std)
//!
//! Swapping these for a hardware timer and an interrupt-driven wait does not
//! touch any component contract.

use core::cell::Cell;

use crate::constants::time::MS_PER_SECOND;

/// Timestamp in milliseconds since device boot
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Short unconditional delay between scheduler polls
pub trait Pause {
    /// Suspend for roughly `ms` milliseconds
    fn pause_ms(&mut self, ms: u32);
}

/// Whole seconds elapsed for a millisecond timestamp, truncated
pub const fn whole_seconds(ts: Timestamp) -> u64 {
    ts / MS_PER_SECOND
}

/// Monotonic time source anchored at construction
///
/// Starts at 0, always increases
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicTime {
    /// Start counting from now
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }
}

/// Pause backed by `std::thread::sleep`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

#[cfg(feature = "std")]
impl Pause for ThreadPause {
    fn pause_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Fixed time source for testing
///
/// Interior mutability lets a test advance the clock while the scheduler
/// holds a shared reference to it.
#[derive(Debug, Clone, Default)]
pub struct FixedTime {
    timestamp: Cell<Timestamp>,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp: Cell::new(timestamp) }
    }

    /// Jump to an absolute time
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Pausing on a fixed clock advances it, so simulated time moves with the loop
impl Pause for &FixedTime {
    fn pause_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms));
    }
}
