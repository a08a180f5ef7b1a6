//! Cadence and property tests
//!
//! Scheduler timing against a mock clock, plus proptest properties of light
//! rescaling, alert evaluation and record formatting.

mod common;

use proptest::prelude::*;

use sentinode_core::{
    alerts::{self, AlertThresholds},
    collector::LightScale,
    report,
    scheduler::Scheduler,
    time::{FixedTime, TimeSource},
    Node, NodeConfig, Sample,
};

use common::{fields, records, Frame, ScriptedPort};

#[test]
fn cycles_follow_floor_of_elapsed_time() {
    for iterations in [0usize, 1, 20, 21, 57, 200] {
        let clock = FixedTime::new(0);
        let mut node = Node::new(
            ScriptedPort::repeating(Frame::calm()),
            String::new(),
            NodeConfig::default(),
        );
        node.start(&clock);

        let cycles = node.run_for(iterations, &clock, &mut &clock);

        // The last poll happened one pause before the clock's final reading
        let last_poll = clock.now().saturating_sub(100);
        let expected = if iterations == 0 { 0 } else { (last_poll / 2000) as usize };
        assert_eq!(cycles, expected, "after {iterations} iterations");
        assert_eq!(node.scheduler().cycles() as usize, cycles);
    }
}

#[test]
fn fired_cycles_are_at_least_one_interval_apart() {
    let clock = FixedTime::new(0);
    let mut node = Node::new(
        ScriptedPort::repeating(Frame::calm()),
        String::new(),
        NodeConfig::default(),
    );
    node.start(&clock);

    let mut fire_times = Vec::new();
    for _ in 0..300 {
        if node.step(&clock).is_some() {
            fire_times.push(clock.now());
        }
        // Uneven poll spacing
        clock.advance(70 + (fire_times.len() as u64 % 3) * 20);
    }

    assert!(fire_times.len() > 5);
    for pair in fire_times.windows(2) {
        assert!(pair[1] - pair[0] >= 2000, "{:?}", pair);
    }
}

#[test]
fn slow_cycle_pushes_next_fire_back() {
    let mut scheduler = Scheduler::new(2000);
    assert!(scheduler.poll(2000).is_ok());
    scheduler.complete(2450);

    assert!(scheduler.poll(4400).is_err());
    assert!(scheduler.poll(4450).is_ok());
}

#[test]
fn started_late_node_waits_a_full_interval() {
    let clock = FixedTime::new(5_000);
    let mut node = Node::new(
        ScriptedPort::repeating(Frame::calm()),
        String::new(),
        NodeConfig::default(),
    );
    node.start(&clock);

    clock.set(6_900);
    assert!(node.step(&clock).is_none());
    clock.set(7_000);
    let outcome = node.step(&clock).unwrap();
    assert_eq!(outcome.sample.timestamp_s, 7);
}

proptest! {
    #[test]
    fn light_rescale_is_monotonic(a in any::<u16>(), b in any::<u16>()) {
        let scale = LightScale::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.rescale(lo) <= scale.rescale(hi));
    }

    #[test]
    fn light_rescale_stays_in_output_range(raw in any::<u16>()) {
        let pct = LightScale::default().rescale(raw);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn light_rescale_hits_both_bounds(raw_min in 0u16..2000, span in 1u16..2000) {
        let scale = LightScale { raw_min, raw_max: raw_min + span, out_min: 0, out_max: 100 };
        prop_assert_eq!(scale.rescale(raw_min), 0.0);
        prop_assert_eq!(scale.rescale(raw_min + span), 100.0);
    }

    #[test]
    fn evaluation_is_deterministic(
        temperature_c in -40.0f32..80.0,
        humidity_pct in 0.0f32..100.0,
        light_pct in 0.0f32..100.0,
        accel in prop::array::uniform3(-8000i32..8000),
    ) {
        let sample = Sample { temperature_c, humidity_pct, light_pct, ..Sample::default() }
            .with_accel(accel);
        let thresholds = AlertThresholds::default();
        prop_assert_eq!(
            alerts::evaluate(&sample, &thresholds),
            alerts::evaluate(&sample, &thresholds)
        );
    }

    #[test]
    fn valid_climate_reaches_record_unchanged(
        temperature_c in -40.0f32..80.0,
        humidity_pct in 0.0f32..100.0,
    ) {
        let port = ScriptedPort::repeating(Frame::calm().with_climate(temperature_c, humidity_pct));
        let mut node = Node::new(port, String::new(), NodeConfig::default());
        node.run_cycle(2000);

        let output = node.sink();
        let record = records(output)[0];
        let expected_temp = format!("{:.2}", temperature_c);
        let expected_humidity = format!("{:.2}", humidity_pct);
        prop_assert_eq!(fields(record)[1], expected_temp.as_str());
        prop_assert_eq!(fields(record)[2], expected_humidity.as_str());
    }

    #[test]
    fn record_always_has_ten_fields(
        timestamp_s in any::<u32>(),
        accel in prop::array::uniform3(any::<i32>()),
        gyro in prop::array::uniform3(any::<i32>()),
    ) {
        let sample = Sample { timestamp_s: u64::from(timestamp_s), ..Sample::default() }
            .with_accel(accel)
            .with_gyro(gyro);
        let mut out = String::new();
        report::write_record(&mut out, &sample).unwrap();
        prop_assert_eq!(fields(out.trim_end()).len(), 10);
    }
}
