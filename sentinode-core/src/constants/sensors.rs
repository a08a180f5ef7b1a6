//! Sensor Datasheet Limits
//!
//! Operating ranges of the parts fitted to the node: DHT22 for climate,
//! an LDR on a 12-bit ADC for light, MPU6050 for motion.

// ===== CLIMATE (DHT22) =====

/// Lowest temperature the DHT22 reports (°C).
///
/// Source: AM2302/DHT22 datasheet
pub const CLIMATE_TEMP_MIN_C: f32 = -40.0;

/// Highest temperature the DHT22 reports (°C).
///
/// Source: AM2302/DHT22 datasheet
pub const CLIMATE_TEMP_MAX_C: f32 = 80.0;

/// Relative humidity lower bound (%).
pub const CLIMATE_HUMIDITY_MIN_PCT: f32 = 0.0;

/// Relative humidity upper bound (%).
pub const CLIMATE_HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== LIGHT (LDR on ADC) =====

/// Raw ADC reading for a fully dark LDR.
pub const LIGHT_RAW_MIN: u16 = 0;

/// Raw ADC reading for a saturated LDR (12-bit converter).
pub const LIGHT_RAW_MAX: u16 = 4095;

/// Rescaled light lower bound (%).
pub const LIGHT_PCT_MIN: u16 = 0;

/// Rescaled light upper bound (%).
pub const LIGHT_PCT_MAX: u16 = 100;

// ===== MOTION (MPU6050) =====

/// Accelerometer full-scale range (±g).
///
/// ±8 g keeps headroom for machine vibration without clipping.
pub const ACCEL_RANGE_G: u8 = 8;

/// Gyroscope full-scale range (±°/s).
pub const GYRO_RANGE_DPS: u16 = 500;

/// Fixed-point factor from physical units to milli-units (g → mg, °/s → m°/s).
pub const MILLI_SCALE: f32 = 1000.0;
