//! Plausibility checks for sensor readings
//!
//! The climate sensor is the only channel with a validity concept. A reading
//! is rejected when either value is not a finite number or falls outside
//! the DHT22 operating range; the collector then degrades both values to
//! zero for the cycle.
//!
//! ```rust
//! use sentinode_core::validators::ClimateValidator;
//! use sentinode_core::ClimateReading;
//!
//! let validator = ClimateValidator::default();
//! let ok = ClimateReading { temperature_c: 24.7, humidity_pct: 55.0 };
//! assert!(validator.validate(ok).is_ok());
//!
//! let bad = ClimateReading { temperature_c: f32::NAN, humidity_pct: 55.0 };
//! assert!(validator.validate(bad).is_err());
//! ```

mod climate;
mod utils;

pub use climate::{ClimateValidator, HumidityValidator, TemperatureValidator};
pub use utils::{check_range, Validatable};

use crate::errors::SensorResult;

/// Validator for one kind of reading
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading
    fn validate(&self, value: Self::Value) -> SensorResult<()>;
}
