//! Sample collection
//!
//! One call to [`SampleCollector::collect`] performs a full read cycle
//! across the sensor port and returns a fully populated [`Sample`]. It never
//! fails: a channel that cannot be read degrades to zero and is reported as
//! a [`SensorFault`] next to the sample.
//!
//! ## Conversions
//!
//! ### Light
//! The raw ADC value is clamped into the input domain, then mapped with
//! integer arithmetic and truncating division:
//! ```text
//! out = (raw - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
//! ```
//! With the default 0..4095 → 0..100 scale, raw 2048 maps to 50 (not 50.01).
//!
//! ### Motion
//! Physical floats become milli-unit integers by scaling by 1000 and
//! truncating toward zero: 1.2349 g → 1234 mg, -0.0009 g → 0 mg. Values
//! beyond the i32 domain saturate; NaN maps to 0.

use heapless::Vec;

use crate::{
    constants::sensors::{LIGHT_PCT_MAX, LIGHT_PCT_MIN, LIGHT_RAW_MAX, LIGHT_RAW_MIN, MILLI_SCALE},
    errors::SensorError,
    ports::{ClimateReading, MotionReading, SensorPort},
    sample::Sample,
    time::{whole_seconds, Timestamp},
    validators::ClimateValidator,
};

/// Diagnostic for a channel that could not be read this cycle
///
/// Distinct from an [`Alert`](crate::Alert): a fault describes the sensor,
/// an alert describes the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorFault {
    /// Climate read failed or was implausible; temperature and humidity are 0
    Climate(SensorError),
    /// Motion read failed; all six axes are 0
    Motion(SensorError),
}

impl SensorFault {
    /// Short diagnostic line for the output stream
    pub const fn message(&self) -> &'static str {
        match self {
            SensorFault::Climate(_) => "Falha na leitura do DHT22!",
            SensorFault::Motion(SensorError::Unavailable) => "MPU6050 indisponível!",
            SensorFault::Motion(_) => "Falha na leitura do MPU6050!",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorFault {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Climate(err) => defmt::write!(fmt, "climate fault: {}", err),
            Self::Motion(err) => defmt::write!(fmt, "motion fault: {}", err),
        }
    }
}

/// Faults raised during one cycle, at most one per failable channel
pub type Faults = Vec<SensorFault, 2>;

/// Result of one read cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    /// The fully populated sample
    pub sample: Sample,
    /// Channels that degraded to zero
    pub faults: Faults,
}

impl Collected {
    /// True when every channel read cleanly
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Linear integer rescaling from the raw light domain to percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightScale {
    /// Raw value for total darkness
    pub raw_min: u16,
    /// Raw value for saturation
    pub raw_max: u16,
    /// Output for `raw_min`
    pub out_min: u16,
    /// Output for `raw_max`
    pub out_max: u16,
}

impl Default for LightScale {
    fn default() -> Self {
        Self {
            raw_min: LIGHT_RAW_MIN,
            raw_max: LIGHT_RAW_MAX,
            out_min: LIGHT_PCT_MIN,
            out_max: LIGHT_PCT_MAX,
        }
    }
}

impl LightScale {
    /// Map a raw reading into the output range
    ///
    /// Raw values outside the input domain saturate at its bounds.
    pub fn rescale(&self, raw: u16) -> f32 {
        let (in_min, in_max) = (i64::from(self.raw_min), i64::from(self.raw_max));
        let (out_min, out_max) = (i64::from(self.out_min), i64::from(self.out_max));

        if in_max <= in_min {
            return out_min as f32;
        }

        let raw = i64::from(raw).clamp(in_min, in_max);
        let mapped = (raw - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
        mapped as f32
    }
}

/// Convert a physical value to milli-units, truncating toward zero
pub fn to_milli(value: f32) -> i32 {
    libm::truncf(value * MILLI_SCALE) as i32
}

/// Performs read cycles against a sensor port
#[derive(Debug, Clone, Default)]
pub struct SampleCollector {
    validator: ClimateValidator,
    light: LightScale,
}

impl SampleCollector {
    /// Collector with a custom light scale
    pub fn new(light: LightScale) -> Self {
        Self {
            validator: ClimateValidator::default(),
            light,
        }
    }

    /// Replace the climate plausibility checks
    pub fn with_validator(mut self, validator: ClimateValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Run one read cycle, stamping the sample with `now`
    pub fn collect<P: SensorPort + ?Sized>(&self, port: &mut P, now: Timestamp) -> Collected {
        let mut sample = Sample {
            timestamp_s: whole_seconds(now),
            ..Sample::default()
        };
        let mut faults = Faults::new();

        match self.read_climate(port) {
            Ok(climate) => {
                sample.temperature_c = climate.temperature_c;
                sample.humidity_pct = climate.humidity_pct;
            }
            Err(err) => {
                log_warn!("Climate read invalid, reporting zeros: {}", err);
                // Capacity covers every failable channel
                let _ = faults.push(SensorFault::Climate(err));
            }
        }

        sample.light_pct = self.light.rescale(port.read_light());

        match port.read_motion() {
            Ok(MotionReading { accel_g, gyro_dps }) => {
                sample = sample
                    .with_accel(accel_g.map(to_milli))
                    .with_gyro(gyro_dps.map(to_milli));
            }
            Err(err) => {
                log_warn!("Motion read failed, reporting zeros: {}", err);
                let _ = faults.push(SensorFault::Motion(err));
            }
        }

        log_debug!("Collected sample at {}s ({} faults)", sample.timestamp_s, faults.len());

        Collected { sample, faults }
    }

    fn read_climate<P: SensorPort + ?Sized>(&self, port: &mut P) -> Result<ClimateReading, SensorError> {
        let reading = port.read_climate()?;
        self.validator.validate(reading)?;
        Ok(reading)
    }
}
