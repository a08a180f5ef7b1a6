//! Core sampling loop for a Sentinode telemetry node
//!
//! Samples three sensor groups (climate, ambient light, 6-axis motion),
//! turns them into one [`Sample`], raises threshold [`Alert`]s and renders
//! both a CSV record and a human-readable block for the output stream.
//!
//! Key constraints:
//! - Runs without an allocator (`no_std` when `std` is off)
//! - Every cycle produces output, even under total sensor failure
//! - Single thread of control, cooperative polling
//!
//! ```no_run
//! use sentinode_core::{alerts, AlertThresholds, Sample};
//!
//! let sample = Sample { temperature_c: 36.0, light_pct: 50.0, ..Sample::default() };
//! let fired = alerts::evaluate(&sample, &AlertThresholds::default());
//! assert_eq!(fired.len(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod alerts;
pub mod collector;
pub mod config;
pub mod constants;
pub mod errors;
pub mod node;
pub mod ports;
pub mod report;
pub mod sample;
pub mod scheduler;
#[cfg(feature = "sim")]
pub mod sim;
pub mod time;
pub mod validators;

// Public API
pub use alerts::{Alert, Alerts, AlertThresholds};
pub use collector::{Collected, SensorFault};
pub use config::NodeConfig;
pub use errors::{ReportError, ReportResult, SensorError, SensorResult};
pub use node::{CycleOutcome, Node};
pub use ports::{ClimateReading, InitStatus, MotionReading, SensorPort, SensorSettings};
pub use report::Reporter;
pub use sample::Sample;
pub use scheduler::{Scheduler, SchedulerState};
pub use time::{Pause, TimeSource, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
