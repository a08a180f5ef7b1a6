//! Node configuration
//!
//! Built once from the compile-time constants and never modified while the
//! loop runs.

use crate::{
    alerts::AlertThresholds,
    collector::LightScale,
    constants::time::{IDLE_PAUSE_MS, SAMPLE_INTERVAL_MS},
    ports::SensorSettings,
};

/// Everything the node needs to run its loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeConfig {
    /// Interval between cycles (ms), measured from the end of the last cycle
    pub sample_interval_ms: u64,
    /// Pause between elapsed-time checks (ms)
    pub idle_pause_ms: u32,
    /// Alert trip points
    pub thresholds: AlertThresholds,
    /// Raw light domain and output range
    pub light: LightScale,
    /// Range settings handed to the sensor port at init
    pub sensors: SensorSettings,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: SAMPLE_INTERVAL_MS,
            idle_pause_ms: IDLE_PAUSE_MS,
            thresholds: AlertThresholds::default(),
            light: LightScale::default(),
            sensors: SensorSettings::default(),
        }
    }
}
