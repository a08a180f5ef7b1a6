//! Constants for Sentinode Core
//!
//! Every compile-time setting of the node lives here. None of these are
//! runtime-configurable: they are baked into [`NodeConfig::default`](crate::NodeConfig).
//!
//! ## Organization
//!
//! - **Sensors**: device ranges and the raw light domain
//! - **Time**: sampling cadence and the idle pause
//! - **Thresholds**: alert trip points

/// Device operating ranges and scaling factors.
pub mod sensors;

/// Sampling interval and idle pause.
pub mod time;

/// Alert thresholds.
pub mod thresholds;

pub use sensors::{
    CLIMATE_TEMP_MIN_C, CLIMATE_TEMP_MAX_C, CLIMATE_HUMIDITY_MIN_PCT, CLIMATE_HUMIDITY_MAX_PCT,
    LIGHT_RAW_MIN, LIGHT_RAW_MAX, LIGHT_PCT_MIN, LIGHT_PCT_MAX,
    ACCEL_RANGE_G, GYRO_RANGE_DPS, MILLI_SCALE,
};

pub use time::{MS_PER_SECOND, SAMPLE_INTERVAL_MS, IDLE_PAUSE_MS};

pub use thresholds::{
    HIGH_TEMPERATURE_C, HIGH_HUMIDITY_PCT, LOW_LIGHT_PCT, EXCESSIVE_VIBRATION_MG,
};
