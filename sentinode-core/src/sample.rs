//! One snapshot of every sensor channel
//!
//! A `Sample` is built fresh by the collector each cycle, handed by
//! reference to the alert evaluator and the reporter, then dropped. Nothing
//! keeps samples across cycles.

/// Snapshot of all channels for a single cycle
///
/// Always fully populated: channels that failed to read carry 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Whole seconds since the node started
    pub timestamp_s: u64,
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Ambient light rescaled to 0-100 (%)
    pub light_pct: f32,
    /// Acceleration along X (mg)
    pub accel_mg_x: i32,
    /// Acceleration along Y (mg)
    pub accel_mg_y: i32,
    /// Acceleration along Z (mg)
    pub accel_mg_z: i32,
    /// Angular rate around X (m°/s)
    pub gyro_mdps_x: i32,
    /// Angular rate around Y (m°/s)
    pub gyro_mdps_y: i32,
    /// Angular rate around Z (m°/s)
    pub gyro_mdps_z: i32,
}

impl Sample {
    /// Acceleration axes as `[x, y, z]`
    pub const fn accel_mg(&self) -> [i32; 3] {
        [self.accel_mg_x, self.accel_mg_y, self.accel_mg_z]
    }

    /// Gyro axes as `[x, y, z]`
    pub const fn gyro_mdps(&self) -> [i32; 3] {
        [self.gyro_mdps_x, self.gyro_mdps_y, self.gyro_mdps_z]
    }

    /// Set all three acceleration axes
    pub fn with_accel(mut self, [x, y, z]: [i32; 3]) -> Self {
        self.accel_mg_x = x;
        self.accel_mg_y = y;
        self.accel_mg_z = z;
        self
    }

    /// Set all three gyro axes
    pub fn with_gyro(mut self, [x, y, z]: [i32; 3]) -> Self {
        self.gyro_mdps_x = x;
        self.gyro_mdps_y = y;
        self.gyro_mdps_z = z;
        self
    }
}
