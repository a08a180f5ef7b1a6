//! sentinode: telemetry loop for a host machine
//!
//! Runs the node against the simulated sensor port. Telemetry (startup
//! lines, CSV records, report blocks) goes to stdout; logs go to stderr and
//! are filtered with `RUST_LOG` (default `info`).
//!
//! ```bash
//! sentinode > capture.log        # stream for the offline analysis
//! RUST_LOG=debug sentinode       # per-cycle diagnostics
//! ```

use std::fmt;
use std::io::{self, Write as _};

use anyhow::Context;
use sentinode_core::{
    sim::SimulatedSensors,
    time::{MonotonicTime, ThreadPause},
    Node, NodeConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Seed for the simulated sensors; fixed so runs are reproducible
const SIMULATION_SEED: u32 = 42;

/// `fmt::Write` adapter over stdout, flushed at every line end
struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl fmt::Write for StdoutSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = self.out.lock();
        out.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        if s.ends_with('\n') {
            out.flush().map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("installing log subscriber")
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = NodeConfig::default();
    tracing::info!(
        interval_ms = config.sample_interval_ms,
        pause_ms = config.idle_pause_ms,
        "Starting sentinode {}",
        sentinode_core::VERSION
    );

    let clock = MonotonicTime::new();
    let mut pause = ThreadPause;
    let mut node = Node::new(SimulatedSensors::new(SIMULATION_SEED), StdoutSink::new(), config);

    let status = node.start(&clock);
    if !status.is_complete() {
        tracing::warn!(?status, "Running with degraded sensors");
    }

    node.run(&clock, &mut pause)
}
