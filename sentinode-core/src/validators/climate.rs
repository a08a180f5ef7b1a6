//! Climate validators for the DHT22
//!
//! The DHT22 signals a failed conversion by returning NaN, and a corrupted
//! frame can decode to values the part cannot produce. Both are rejected.

use crate::{
    constants::sensors::{
        CLIMATE_HUMIDITY_MAX_PCT, CLIMATE_HUMIDITY_MIN_PCT, CLIMATE_TEMP_MAX_C, CLIMATE_TEMP_MIN_C,
    },
    errors::{SensorError, SensorResult},
    ports::ClimateReading,
};

use super::{
    utils::{self, Validatable},
    Validator,
};

/// Temperature validator for Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    min_celsius: f32,
    max_celsius: f32,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            min_celsius: CLIMATE_TEMP_MIN_C,
            max_celsius: CLIMATE_TEMP_MAX_C,
        }
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            min_celsius: min.max(-273.15), // Can't go below absolute zero
            max_celsius: max,
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> SensorResult<()> {
        if !value.is_valid() {
            return Err(SensorError::NotANumber);
        }
        utils::check_range(value, self.min_celsius, self.max_celsius)
    }
}

/// Relative humidity validator
#[derive(Debug, Clone)]
pub struct HumidityValidator {
    min_percent: f32,
    max_percent: f32,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self {
            min_percent: CLIMATE_HUMIDITY_MIN_PCT,
            max_percent: CLIMATE_HUMIDITY_MAX_PCT,
        }
    }
}

impl Validator for HumidityValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> SensorResult<()> {
        if !value.is_valid() {
            return Err(SensorError::NotANumber);
        }
        utils::check_range(value, self.min_percent, self.max_percent)
    }
}

/// Validates a full climate reading, temperature first
#[derive(Debug, Clone, Default)]
pub struct ClimateValidator {
    temperature: TemperatureValidator,
    humidity: HumidityValidator,
}

impl ClimateValidator {
    /// Combine custom channel validators
    pub fn new(temperature: TemperatureValidator, humidity: HumidityValidator) -> Self {
        Self { temperature, humidity }
    }

    /// Validate both channels of a reading
    pub fn validate(&self, reading: ClimateReading) -> SensorResult<()> {
        self.temperature.validate(reading.temperature_c)?;
        self.humidity.validate(reading.humidity_pct)
    }
}
