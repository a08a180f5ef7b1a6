//! Alert Thresholds
//!
//! All comparisons are strict: a value equal to the threshold does not trip.

/// Temperature above which `HighTemperature` fires (°C).
pub const HIGH_TEMPERATURE_C: f32 = 35.0;

/// Relative humidity above which `HighHumidity` fires (%).
pub const HIGH_HUMIDITY_PCT: f32 = 80.0;

/// Light level below which `LowLight` fires (%).
pub const LOW_LIGHT_PCT: f32 = 10.0;

/// Acceleration magnitude above which `ExcessiveVibration` fires (mg).
///
/// A resting node reads about 1000 mg (gravity alone).
pub const EXCESSIVE_VIBRATION_MG: f64 = 2000.0;
