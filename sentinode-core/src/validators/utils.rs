//! Shared range and finiteness checks

use crate::errors::{SensorError, SensorResult};

/// Check if a value is within the inclusive range `[min, max]`
pub fn check_range(value: f32, min: f32, max: f32) -> SensorResult<()> {
    if value < min || value > max {
        Err(SensorError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Trait for values that can be checked for numeric sanity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
