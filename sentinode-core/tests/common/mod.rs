//! Common test utilities for integration tests
//!
//! This module provides:
//! - A scripted sensor port that replays queued readings
//! - Reading builders for the usual bench conditions
//! - Output helpers for splitting the captured stream

#![allow(dead_code)]

use std::collections::VecDeque;

use sentinode_core::{
    ClimateReading, InitStatus, MotionReading, SensorError, SensorPort, SensorResult,
    SensorSettings,
};

/// One cycle's worth of raw readings
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub climate: SensorResult<ClimateReading>,
    pub light: u16,
    pub motion: SensorResult<MotionReading>,
}

impl Frame {
    /// Room conditions: 25 °C, 50 %, mid light, resting on the bench
    pub fn calm() -> Self {
        Self {
            climate: Ok(ClimateReading { temperature_c: 25.0, humidity_pct: 50.0 }),
            light: 2048,
            motion: Ok(MotionReading {
                accel_g: [0.01, 0.01, 1.0],
                gyro_dps: [0.0, 0.0, 0.0],
            }),
        }
    }

    pub fn with_climate(mut self, temperature_c: f32, humidity_pct: f32) -> Self {
        self.climate = Ok(ClimateReading { temperature_c, humidity_pct });
        self
    }

    pub fn with_light(mut self, raw: u16) -> Self {
        self.light = raw;
        self
    }

    pub fn with_accel(mut self, accel_g: [f32; 3]) -> Self {
        if let Ok(motion) = self.motion.as_mut() {
            motion.accel_g = accel_g;
        }
        self
    }

    pub fn climate_failed(mut self, err: SensorError) -> Self {
        self.climate = Err(err);
        self
    }
}

/// Sensor port replaying a script, repeating the last frame once exhausted
pub struct ScriptedPort {
    frames: VecDeque<Frame>,
    current: Frame,
    status: InitStatus,
    pub init_calls: usize,
    pub settings: Option<SensorSettings>,
}

impl ScriptedPort {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: Frame::calm(),
            status: InitStatus::all_ok(),
            init_calls: 0,
            settings: None,
        }
    }

    pub fn repeating(frame: Frame) -> Self {
        let mut port = Self::new([]);
        port.current = frame;
        port
    }

    /// Report a motion sensor that failed to come up; every read is unavailable
    pub fn motion_offline(mut self) -> Self {
        self.status.motion = false;
        self.current.motion = Err(SensorError::Unavailable);
        for frame in &mut self.frames {
            frame.motion = Err(SensorError::Unavailable);
        }
        self
    }
}

impl SensorPort for ScriptedPort {
    fn init(&mut self, settings: &SensorSettings) -> InitStatus {
        self.init_calls += 1;
        self.settings = Some(*settings);
        self.status
    }

    // Climate is read first in every cycle, so it advances the script
    fn read_climate(&mut self) -> SensorResult<ClimateReading> {
        if let Some(next) = self.frames.pop_front() {
            self.current = next;
        }
        self.current.climate
    }

    fn read_light(&mut self) -> u16 {
        self.current.light
    }

    fn read_motion(&mut self) -> SensorResult<MotionReading> {
        self.current.motion
    }
}

/// CSV records in a captured stream (lines starting with a digit)
pub fn records(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .collect()
}

/// Alert lines in a captured stream
pub fn alert_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("⚠️  ALERTA: "))
        .collect()
}

/// Fields of one CSV record
pub fn fields(record: &str) -> Vec<&str> {
    record.split(',').collect()
}
