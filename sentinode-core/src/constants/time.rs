//! Time-Related Constants
//!
//! Cadence of the sampling loop.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Interval between two sampling cycles (milliseconds).
///
/// Measured from the end of the previous cycle, not on a fixed grid.
pub const SAMPLE_INTERVAL_MS: u64 = 2000;

/// Pause between two elapsed-time checks (milliseconds).
///
/// Keeps the processor from spinning. Short enough that the drift it adds
/// (at most one pause per cycle) stays well below the sample interval.
pub const IDLE_PAUSE_MS: u32 = 100;
