//! Error Types for Sensor Reads and Report Output
//!
//! ## Design Philosophy
//!
//! Errors on this node are small, `Copy` and allocation free: they are
//! produced once per cycle, carried inside [`SensorFault`](crate::SensorFault)
//! diagnostics and never escalated. No error in this crate terminates the
//! sampling loop.
//!
//! ## Error Categories
//!
//! ### Sensor reads
//! - `NotANumber`: the transducer returned NaN or infinity
//! - `OutOfRange`: the value is outside the device's operating range
//! - `Unavailable`: the device failed to initialize at startup
//! - `BusFault`: the bus transaction itself failed (timeout, NACK, checksum)
//!
//! ### Output
//! - `ReportError::Sink`: the output stream rejected a write
//!
//! ```rust
//! use sentinode_core::{SensorError, SensorResult};
//!
//! fn read_or_zero(read: SensorResult<f32>) -> f32 {
//!     match read {
//!         Ok(value) => value,
//!         // Degrade to zero, the cycle still reports
//!         Err(SensorError::NotANumber | SensorError::OutOfRange { .. }) => 0.0,
//!         Err(_) => 0.0,
//!     }
//! }
//! # assert_eq!(read_or_zero(Err(SensorError::NotANumber)), 0.0);
//! ```

use thiserror_no_std::Error;

/// Result type for sensor reads
pub type SensorResult<T> = Result<T, SensorError>;

/// Result type for report output
pub type ReportResult<T> = Result<T, ReportError>;

/// Failure of a single sensor read
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Transducer reported a value that is not a number
    #[error("Sensor returned a non-finite value")]
    NotANumber,

    /// Value outside the device's operating range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed validation
        value: f32,
        /// Lowest value the device reports
        min: f32,
        /// Highest value the device reports
        max: f32,
    },

    /// Device did not initialize, reads cannot succeed
    #[error("Sensor unavailable")]
    Unavailable,

    /// Bus transaction failed
    #[error("Sensor bus fault: {reason}")]
    BusFault {
        /// Short description from the driver
        reason: &'static str,
    },
}

/// Failure to write into the output stream
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Sink rejected the write
    #[error("Output sink rejected write")]
    Sink,
}

impl From<core::fmt::Error> for ReportError {
    fn from(_: core::fmt::Error) -> Self {
        ReportError::Sink
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotANumber =>
                defmt::write!(fmt, "Non-finite value"),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::Unavailable =>
                defmt::write!(fmt, "Sensor unavailable"),
            Self::BusFault { reason } =>
                defmt::write!(fmt, "Bus fault: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Sink => defmt::write!(fmt, "Output sink rejected write"),
        }
    }
}
