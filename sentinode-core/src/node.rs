//! The sampling loop
//!
//! [`Node`] wires the pipeline together:
//!
//! ```text
//! Scheduler ─▶ SampleCollector ─▶ alerts::evaluate ─▶ Reporter
//!    (due?)       (Sample)           (Alerts)         (output stream)
//! ```
//!
//! Data only flows downward and the `Sample` lives for one cycle. Nothing
//! here can stop the loop: sensor faults degrade to zero and report errors
//! are logged, then the next cycle runs as usual.
//!
//! ```rust
//! use sentinode_core::{Node, NodeConfig};
//! use sentinode_core::sim::SimulatedSensors;
//! use sentinode_core::time::FixedTime;
//!
//! let clock = FixedTime::new(0);
//! let mut node = Node::new(SimulatedSensors::new(7), heapless::String::<4096>::new(), NodeConfig::default());
//! node.start(&clock);
//!
//! // Just under ten simulated seconds in 100 ms pauses
//! let cycles = node.run_for(100, &clock, &mut &clock);
//! assert_eq!(cycles, 4);
//! ```

use core::fmt::Write;

use crate::{
    alerts::{self, Alerts},
    collector::{Faults, SampleCollector},
    config::NodeConfig,
    errors::ReportResult,
    ports::{InitStatus, SensorPort},
    report::Reporter,
    sample::Sample,
    scheduler::Scheduler,
    time::{Pause, TimeSource, Timestamp},
};

/// Everything one cycle produced
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// The sample that was reported
    pub sample: Sample,
    /// Alerts fired against it
    pub alerts: Alerts,
    /// Channels that degraded to zero
    pub faults: Faults,
    /// Whether the output stream accepted the report
    pub report: ReportResult<()>,
}

/// A telemetry node: sensor port, pipeline and scheduler
pub struct Node<P: SensorPort, W: Write> {
    port: P,
    collector: SampleCollector,
    reporter: Reporter<W>,
    config: NodeConfig,
    scheduler: Scheduler,
    status: Option<InitStatus>,
}

impl<P: SensorPort, W: Write> Node<P, W> {
    /// Node reading from `port` and reporting into `sink`
    pub fn new(port: P, sink: W, config: NodeConfig) -> Self {
        Self {
            port,
            collector: SampleCollector::new(config.light),
            reporter: Reporter::new(sink),
            scheduler: Scheduler::new(config.sample_interval_ms),
            config,
            status: None,
        }
    }

    /// Initialize the sensors and write the startup output
    ///
    /// The first cycle is due one interval after this call.
    pub fn start<T: TimeSource + ?Sized>(&mut self, clock: &T) -> InitStatus {
        let status = self.port.init(&self.config.sensors);

        if status.is_complete() {
            log_info!("All sensors initialized");
        } else {
            log_warn!(
                "Sensor init incomplete: climate={} light={} motion={}",
                status.climate,
                status.light,
                status.motion
            );
        }

        if let Err(err) = self.reporter.startup(&status) {
            log_warn!("Startup output failed: {}", err);
        }

        self.scheduler = Scheduler::starting_at(self.config.sample_interval_ms, clock.now());
        self.status = Some(status);
        status
    }

    /// Collect, evaluate and report once, regardless of the schedule
    pub fn run_cycle(&mut self, now: Timestamp) -> CycleOutcome {
        let collected = self.collector.collect(&mut self.port, now);
        let alerts = alerts::evaluate(&collected.sample, &self.config.thresholds);

        let report = self
            .reporter
            .report(&collected.sample, &alerts, &collected.faults);
        if let Err(err) = report {
            log_warn!("Report for {}s not written: {}", collected.sample.timestamp_s, err);
        }

        CycleOutcome {
            sample: collected.sample,
            alerts,
            faults: collected.faults,
            report,
        }
    }

    /// Poll the scheduler once, running a cycle if one is due
    pub fn step<T: TimeSource + ?Sized>(&mut self, clock: &T) -> Option<CycleOutcome> {
        let now = clock.now();
        match self.scheduler.poll(now) {
            Ok(()) => {
                let outcome = self.run_cycle(now);
                let done = clock.now();
                self.scheduler.complete(done);
                log_debug!(
                    "Cycle {} done, next due in {} ms",
                    self.scheduler.cycles(),
                    self.scheduler.remaining_ms(done)
                );
                Some(outcome)
            }
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(never)) => match never {},
        }
    }

    /// Step and pause `iterations` times, returning how many cycles ran
    pub fn run_for<T, D>(&mut self, iterations: usize, clock: &T, pause: &mut D) -> usize
    where
        T: TimeSource + ?Sized,
        D: Pause + ?Sized,
    {
        let mut cycles = 0;
        for _ in 0..iterations {
            if self.step(clock).is_some() {
                cycles += 1;
            }
            pause.pause_ms(self.config.idle_pause_ms);
        }
        cycles
    }

    /// Run until the host stops the process
    pub fn run<T, D>(&mut self, clock: &T, pause: &mut D) -> !
    where
        T: TimeSource + ?Sized,
        D: Pause + ?Sized,
    {
        loop {
            self.step(clock);
            pause.pause_ms(self.config.idle_pause_ms);
        }
    }

    /// Init status from [`start`](Self::start), if it ran
    pub fn status(&self) -> Option<InitStatus> {
        self.status
    }

    /// The scheduler driving this node
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Borrow the output sink
    pub fn sink(&self) -> &W {
        self.reporter.sink()
    }

    /// Take the port and sink back
    pub fn into_parts(self) -> (P, W) {
        (self.port, self.reporter.into_inner())
    }
}
