//! Sensor port - abstraction boundary to the physical sensors
//!
//! The collector reads the node's three sensor groups through this trait
//! without knowing whether they sit on 1-Wire, I2C, an ADC pin or a test
//! script. Bus protocols and calibration registers stay in the
//! implementation.

use crate::constants::sensors::{ACCEL_RANGE_G, GYRO_RANGE_DPS};
use crate::errors::SensorResult;

/// Range settings passed to the port once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSettings {
    /// Accelerometer full scale (±g)
    pub accel_range_g: u8,
    /// Gyroscope full scale (±°/s)
    pub gyro_range_dps: u16,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            accel_range_g: ACCEL_RANGE_G,
            gyro_range_dps: GYRO_RANGE_DPS,
        }
    }
}

/// Outcome of initializing each capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStatus {
    /// Climate sensor responded
    pub climate: bool,
    /// Light channel configured
    pub light: bool,
    /// Motion sensor responded
    pub motion: bool,
}

impl InitStatus {
    /// Every capability came up
    pub const fn all_ok() -> Self {
        Self { climate: true, light: true, motion: true }
    }

    /// True when every capability came up
    pub const fn is_complete(&self) -> bool {
        self.climate && self.light && self.motion
    }
}

/// Raw climate transducer output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    /// Temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
}

/// Raw motion output in physical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionReading {
    /// Acceleration `[x, y, z]` (g)
    pub accel_g: [f32; 3],
    /// Angular rate `[x, y, z]` (°/s)
    pub gyro_dps: [f32; 3],
}

/// Port for reading the node's sensors
///
/// Each read is a bounded-latency synchronous call and is independent of
/// the others: one failing never prevents the next from being attempted.
///
/// # Example Implementation
///
/// ```ignore
/// struct BoardSensors {
///     dht: Dht22<Pin4>,
///     adc: Adc<Adc1>,
///     ldr: Pin34,
///     mpu: Option<Mpu6050<I2c0>>,
/// }
///
/// impl SensorPort for BoardSensors {
///     fn init(&mut self, settings: &SensorSettings) -> InitStatus {
///         let motion = self.mpu.as_mut().map_or(false, |mpu| {
///             mpu.set_ranges(settings.accel_range_g, settings.gyro_range_dps).is_ok()
///         });
///         InitStatus { climate: true, light: true, motion }
///     }
///
///     fn read_climate(&mut self) -> SensorResult<ClimateReading> {
///         let (t, h) = self.dht.read().map_err(|_| SensorError::BusFault { reason: "dht22" })?;
///         Ok(ClimateReading { temperature_c: t, humidity_pct: h })
///     }
///
///     fn read_light(&mut self) -> u16 {
///         self.adc.read(&mut self.ldr)
///     }
///
///     fn read_motion(&mut self) -> SensorResult<MotionReading> {
///         let mpu = self.mpu.as_mut().ok_or(SensorError::Unavailable)?;
///         Ok(MotionReading { accel_g: mpu.accel(), gyro_dps: mpu.gyro() })
///     }
/// }
/// ```
pub trait SensorPort {
    /// Bring up every capability with the given ranges
    ///
    /// Called once, before the first cycle.
    fn init(&mut self, settings: &SensorSettings) -> InitStatus;

    /// Read temperature and humidity
    ///
    /// Values are returned as reported; the collector decides whether they
    /// are plausible.
    fn read_climate(&mut self) -> SensorResult<ClimateReading>;

    /// Read the raw light level in the device's input domain
    ///
    /// This channel has no failure mode.
    fn read_light(&mut self) -> u16;

    /// Read acceleration and angular rate
    ///
    /// Returns `Err(SensorError::Unavailable)` on every call when the device
    /// failed to initialize.
    fn read_motion(&mut self) -> SensorResult<MotionReading>;
}
