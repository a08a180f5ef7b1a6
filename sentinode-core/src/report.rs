//! Output stream rendering
//!
//! Every cycle writes, in this order:
//! 1. one diagnostic line per [`SensorFault`] (if any)
//! 2. the CSV record, fields in the header's order
//! 3. the human-readable block, ending with a separator line
//!
//! ```text
//! 4,25.00,50.00,50.00,10,10,1000,0,0,0
//! --- Leitura dos Sensores ---
//! Ambiente:
//!   Temperatura: 25.00°C
//!   Umidade: 50.00%
//!   Luminosidade: 50.00%
//! Vibração/Movimento (MPU6050):
//!   Aceleração (mg): X=10, Y=10, Z=1000
//!   Giroscópio (mdps): X=0, Y=0, Z=0
//! ================================
//! ```
//!
//! Rendering is deterministic: the same inputs always produce the same bytes.
//! The render functions write into any [`core::fmt::Write`], so a
//! `heapless::String` works as well as a UART or stdout adapter.

use core::fmt::Write;

use crate::{
    alerts::Alert,
    collector::SensorFault,
    errors::ReportResult,
    ports::InitStatus,
    sample::Sample,
};

/// Banner printed once at startup
pub const STARTUP_BANNER: &str = "=== Sistema de Monitoramento Industrial ===";

/// CSV header, printed once at startup
pub const CSV_HEADER: &str =
    "Timestamp,Temperatura(C),Umidade(%),Luminosidade,Accel_X,Accel_Y,Accel_Z,Gyro_X,Gyro_Y,Gyro_Z";

/// First line of the human block
pub const BLOCK_BANNER: &str = "--- Leitura dos Sensores ---";

/// Last line of the human block
pub const BLOCK_SEPARATOR: &str = "================================";

/// Marker in front of every alert line
pub const ALERT_PREFIX: &str = "⚠️  ALERTA: ";

/// Write the startup banner, one status line per capability and the CSV header
pub fn write_startup<W: Write>(w: &mut W, status: &InitStatus) -> ReportResult<()> {
    writeln!(w, "{}", STARTUP_BANNER)?;
    for (name, ok) in [
        ("DHT22", status.climate),
        ("LDR", status.light),
        ("MPU6050", status.motion),
    ] {
        writeln!(w, "{}: {}", name, if ok { "OK" } else { "FALHA" })?;
    }
    write_header(w)
}

/// Write the CSV header line
pub fn write_header<W: Write>(w: &mut W) -> ReportResult<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    Ok(())
}

/// Write the machine-parsable record
pub fn write_record<W: Write>(w: &mut W, sample: &Sample) -> ReportResult<()> {
    let [ax, ay, az] = sample.accel_mg();
    let [gx, gy, gz] = sample.gyro_mdps();
    writeln!(
        w,
        "{},{:.2},{:.2},{:.2},{},{},{},{},{},{}",
        sample.timestamp_s,
        sample.temperature_c,
        sample.humidity_pct,
        sample.light_pct,
        ax,
        ay,
        az,
        gx,
        gy,
        gz,
    )?;
    Ok(())
}

/// Write the human-readable block, alerts in the order given
pub fn write_block<W: Write>(w: &mut W, sample: &Sample, alerts: &[Alert]) -> ReportResult<()> {
    let [ax, ay, az] = sample.accel_mg();
    let [gx, gy, gz] = sample.gyro_mdps();

    writeln!(w, "{}", BLOCK_BANNER)?;
    writeln!(w, "Ambiente:")?;
    writeln!(w, "  Temperatura: {:.2}°C", sample.temperature_c)?;
    writeln!(w, "  Umidade: {:.2}%", sample.humidity_pct)?;
    writeln!(w, "  Luminosidade: {:.2}%", sample.light_pct)?;
    writeln!(w, "Vibração/Movimento (MPU6050):")?;
    writeln!(w, "  Aceleração (mg): X={}, Y={}, Z={}", ax, ay, az)?;
    writeln!(w, "  Giroscópio (mdps): X={}, Y={}, Z={}", gx, gy, gz)?;
    for alert in alerts {
        writeln!(w, "{}{}", ALERT_PREFIX, alert.message())?;
    }
    writeln!(w, "{}", BLOCK_SEPARATOR)?;
    Ok(())
}

/// Write one diagnostic line per fault
pub fn write_faults<W: Write>(w: &mut W, faults: &[SensorFault]) -> ReportResult<()> {
    for fault in faults {
        writeln!(w, "{}", fault.message())?;
    }
    Ok(())
}

/// Terminal sink of the pipeline
///
/// Owns the output stream; nothing downstream consumes what it writes.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    sink: W,
}

impl<W: Write> Reporter<W> {
    /// Report into `sink`
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Startup output, written once before the first cycle
    pub fn startup(&mut self, status: &InitStatus) -> ReportResult<()> {
        write_startup(&mut self.sink, status)
    }

    /// Per-cycle output
    pub fn report(
        &mut self,
        sample: &Sample,
        alerts: &[Alert],
        faults: &[SensorFault],
    ) -> ReportResult<()> {
        write_faults(&mut self.sink, faults)?;
        write_record(&mut self.sink, sample)?;
        write_block(&mut self.sink, sample, alerts)
    }

    /// Borrow the sink
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Give the sink back
    pub fn into_inner(self) -> W {
        self.sink
    }
}
