//! Simulated sensor port
//!
//! Deterministic stand-in for the board when no hardware is attached. The
//! waveforms match the data generator used by the offline log analysis:
//!
//! - **Temperature**: 24.7 °C base, slow sinusoidal trend and a longer
//!   daily-like swing, ±0.3 °C noise
//! - **Humidity**: 55 % base, inversely correlated with temperature,
//!   clamped to 30..85 %
//! - **Light**: 50 ± 35 % cycle with weather noise, mapped back onto the raw
//!   ADC domain
//! - **Motion**: gravity (1 g) on Z plus noise, noise only on X/Y and the gyros
//!
//! Each `read_climate` call advances simulated time by one sample interval,
//! so a cycle's light and motion readings share its timestamp.

use crate::{
    constants::{
        sensors::{LIGHT_RAW_MAX, LIGHT_RAW_MIN},
        time::{MS_PER_SECOND, SAMPLE_INTERVAL_MS},
    },
    errors::{SensorError, SensorResult},
    ports::{ClimateReading, InitStatus, MotionReading, SensorPort, SensorSettings},
};

const BASE_TEMP_C: f32 = 24.7;
const BASE_HUMIDITY_PCT: f32 = 55.0;

/// Simulated climate, light and motion sensors
#[derive(Debug, Clone)]
pub struct SimulatedSensors {
    seed: u32,
    step: u32,
    step_s: f32,
    climate_dropout: Option<u32>,
    motion_online: bool,
    settings: Option<SensorSettings>,
}

impl SimulatedSensors {
    /// Simulation seeded with `seed`; the same seed replays the same series
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            step: 0,
            step_s: (SAMPLE_INTERVAL_MS / MS_PER_SECOND) as f32,
            climate_dropout: None,
            motion_online: true,
            settings: None,
        }
    }

    /// Make every `every_n`-th climate read return NaN, as a DHT22 does on a
    /// failed conversion. Zero disables dropouts.
    pub fn with_climate_dropout(mut self, every_n: u32) -> Self {
        self.climate_dropout = (every_n > 0).then_some(every_n);
        self
    }

    /// Simulate a motion sensor that never answers on the bus
    pub fn with_motion_offline(mut self) -> Self {
        self.motion_online = false;
        self
    }

    /// Settings received at init
    pub fn settings(&self) -> Option<SensorSettings> {
        self.settings
    }

    fn elapsed_s(&self) -> f32 {
        self.step as f32 * self.step_s
    }

    fn random_float(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed as f32) / (u32::MAX as f32)
    }

    /// Zero-centred noise spread over ±`amplitude`
    fn noise(&mut self, amplitude: f32) -> f32 {
        (self.random_float() - 0.5) * 2.0 * amplitude
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new(42)
    }
}

impl SensorPort for SimulatedSensors {
    fn init(&mut self, settings: &SensorSettings) -> InitStatus {
        self.settings = Some(*settings);
        InitStatus {
            climate: true,
            light: true,
            motion: self.motion_online,
        }
    }

    fn read_climate(&mut self) -> SensorResult<ClimateReading> {
        self.step = self.step.wrapping_add(1);
        let t = self.elapsed_s();

        let trend = libm::sinf(t * 0.01) * 2.0;
        let daily = libm::sinf(t * 0.001) * 4.0;
        let temperature_c = BASE_TEMP_C + trend + daily + self.noise(0.3);

        let humidity_pct = (BASE_HUMIDITY_PCT - (temperature_c - BASE_TEMP_C) * 1.2
            + self.noise(1.5))
            .clamp(30.0, 85.0);

        let dropped = self
            .climate_dropout
            .is_some_and(|every_n| self.step % every_n == 0);
        if dropped {
            return Ok(ClimateReading { temperature_c: f32::NAN, humidity_pct: f32::NAN });
        }

        Ok(ClimateReading { temperature_c, humidity_pct })
    }

    fn read_light(&mut self) -> u16 {
        let t = self.elapsed_s();
        let pct = (50.0 + 35.0 * libm::sinf(t * 0.008) + self.noise(8.0)).clamp(0.0, 100.0);
        let span = f32::from(LIGHT_RAW_MAX - LIGHT_RAW_MIN);
        LIGHT_RAW_MIN + (pct / 100.0 * span) as u16
    }

    fn read_motion(&mut self) -> SensorResult<MotionReading> {
        if !self.motion_online {
            return Err(SensorError::Unavailable);
        }

        Ok(MotionReading {
            accel_g: [self.noise(0.05), self.noise(0.05), 1.0 + self.noise(0.025)],
            gyro_dps: [self.noise(0.03), self.noise(0.03), self.noise(0.02)],
        })
    }
}
