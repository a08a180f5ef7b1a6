//! Threshold alerts
//!
//! [`evaluate`] is a pure function of a [`Sample`] and the thresholds. The
//! four rules are checked independently, always in the same order, so
//! several alerts can fire in one cycle and the output is reproducible. No
//! state is carried between cycles: no hysteresis, no de-duplication.
//!
//! | Order | Rule                              | Alert                |
//! |-------|-----------------------------------|----------------------|
//! | 1     | `temperature_c > 35.0`            | `HighTemperature`    |
//! | 2     | `humidity_pct > 80.0`             | `HighHumidity`       |
//! | 3     | `light_pct < 10.0`                | `LowLight`           |
//! | 4     | `‖accel_mg‖ > 2000`               | `ExcessiveVibration` |

use heapless::Vec;

use crate::{
    constants::thresholds::{
        EXCESSIVE_VIBRATION_MG, HIGH_HUMIDITY_PCT, HIGH_TEMPERATURE_C, LOW_LIGHT_PCT,
    },
    sample::Sample,
};

/// A named threshold violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Alert {
    /// Temperature above the limit
    HighTemperature = 0,
    /// Humidity above the limit
    HighHumidity = 1,
    /// Light below the limit
    LowLight = 2,
    /// Acceleration magnitude above the limit
    ExcessiveVibration = 3,
}

impl Alert {
    /// Every alert in evaluation order
    pub const ALL: [Alert; 4] = [
        Alert::HighTemperature,
        Alert::HighHumidity,
        Alert::LowLight,
        Alert::ExcessiveVibration,
    ];

    /// Fixed message printed in the report
    pub const fn message(&self) -> &'static str {
        match self {
            Alert::HighTemperature => "Temperatura elevada!",
            Alert::HighHumidity => "Umidade muito alta!",
            Alert::LowLight => "Luminosidade muito baixa!",
            Alert::ExcessiveVibration => "Vibração excessiva detectada!",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Alert {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.message())
    }
}

/// Alerts fired in one cycle, in evaluation order
pub type Alerts = Vec<Alert, 4>;

/// Trip points for the four rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// `HighTemperature` above this (°C)
    pub high_temperature_c: f32,
    /// `HighHumidity` above this (%)
    pub high_humidity_pct: f32,
    /// `LowLight` below this (%)
    pub low_light_pct: f32,
    /// `ExcessiveVibration` above this magnitude (mg)
    pub excessive_vibration_mg: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            high_temperature_c: HIGH_TEMPERATURE_C,
            high_humidity_pct: HIGH_HUMIDITY_PCT,
            low_light_pct: LOW_LIGHT_PCT,
            excessive_vibration_mg: EXCESSIVE_VIBRATION_MG,
        }
    }
}

/// Euclidean norm of the acceleration vector (mg)
///
/// Squares are summed in u64: each is at most 2^62, so three i32 axes
/// cannot overflow.
pub fn vibration_magnitude(sample: &Sample) -> f64 {
    let sum_sq: u64 = sample
        .accel_mg()
        .iter()
        .map(|&axis| {
            let axis = u64::from(axis.unsigned_abs());
            axis * axis
        })
        .sum();
    libm::sqrt(sum_sq as f64)
}

/// Apply every rule to `sample`
pub fn evaluate(sample: &Sample, thresholds: &AlertThresholds) -> Alerts {
    let checks = [
        (Alert::HighTemperature, sample.temperature_c > thresholds.high_temperature_c),
        (Alert::HighHumidity, sample.humidity_pct > thresholds.high_humidity_pct),
        (Alert::LowLight, sample.light_pct < thresholds.low_light_pct),
        (
            Alert::ExcessiveVibration,
            vibration_magnitude(sample) > thresholds.excessive_vibration_mg,
        ),
    ];

    let mut alerts = Alerts::new();
    for (alert, fired) in checks {
        if fired {
            // One slot per rule
            let _ = alerts.push(alert);
        }
    }
    alerts
}
