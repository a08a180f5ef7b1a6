//! Integration tests for the sampling pipeline
//!
//! Drives a full node against a scripted sensor port and checks the
//! output stream it produces.

mod common;

use sentinode_core::{
    alerts::{self, Alert, AlertThresholds},
    report,
    time::FixedTime,
    Node, NodeConfig, Sample, SensorError, SensorFault,
};

use common::{alert_lines, fields, records, Frame, ScriptedPort};

fn node(port: ScriptedPort) -> Node<ScriptedPort, String> {
    Node::new(port, String::new(), NodeConfig::default())
}

#[test]
fn startup_then_one_record_per_cycle() {
    let clock = FixedTime::new(0);
    let mut node = node(ScriptedPort::repeating(Frame::calm()));

    node.start(&clock);
    let cycles = node.run_for(61, &clock, &mut &clock);

    let (port, output) = node.into_parts();
    assert_eq!(port.init_calls, 1);
    assert_eq!(cycles, 3);

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(report::STARTUP_BANNER));
    assert_eq!(lines.next(), Some("DHT22: OK"));
    assert_eq!(lines.next(), Some("LDR: OK"));
    assert_eq!(lines.next(), Some("MPU6050: OK"));
    assert_eq!(lines.next(), Some(report::CSV_HEADER));

    let recs = records(&output);
    assert_eq!(
        recs,
        [
            "2,25.00,50.00,50.00,10,10,1000,0,0,0",
            "4,25.00,50.00,50.00,10,10,1000,0,0,0",
            "6,25.00,50.00,50.00,10,10,1000,0,0,0",
        ]
    );
    assert_eq!(output.matches(report::BLOCK_SEPARATOR).count(), 3);
}

#[test]
fn valid_climate_is_reported_to_two_decimals() {
    let port = ScriptedPort::new([
        Frame::calm().with_climate(24.7, 55.3),
        Frame::calm().with_climate(-3.126, 99.999),
    ]);
    let mut node = node(port);

    node.run_cycle(2000);
    node.run_cycle(4000);

    let output = node.sink().clone();
    let recs = records(&output);
    assert_eq!(&fields(recs[0])[1..3], ["24.70", "55.30"]);
    assert_eq!(&fields(recs[1])[1..3], ["-3.13", "100.00"]);
}

#[test]
fn invalid_climate_reports_zeros_and_a_fault() {
    let port = ScriptedPort::new([
        Frame::calm().with_climate(f32::NAN, 40.0),
        Frame::calm().with_climate(20.0, 140.0),
        Frame::calm().climate_failed(SensorError::BusFault { reason: "checksum" }),
    ]);
    let mut node = node(port);

    for cycle in 1..=3u64 {
        let outcome = node.run_cycle(cycle * 2000);
        assert_eq!(outcome.sample.temperature_c, 0.0);
        assert_eq!(outcome.sample.humidity_pct, 0.0);
        assert!(matches!(outcome.faults.as_slice(), [SensorFault::Climate(_)]));
    }

    let output = node.sink();
    for record in records(output) {
        assert_eq!(&fields(record)[1..3], ["0.00", "0.00"]);
    }
    assert_eq!(output.matches("Falha na leitura do DHT22!").count(), 3);
}

#[test]
fn motion_offline_is_surfaced_every_cycle() {
    let clock = FixedTime::new(0);
    let mut node = node(ScriptedPort::repeating(Frame::calm()).motion_offline());

    let status = node.start(&clock);
    assert!(!status.motion);

    let cycles = node.run_for(41, &clock, &mut &clock);
    assert_eq!(cycles, 2);

    let output = node.sink();
    assert!(output.contains("MPU6050: FALHA\n"));
    assert_eq!(output.matches("MPU6050 indisponível!").count(), 2);
    for record in records(output) {
        assert_eq!(&fields(record)[4..], ["0", "0", "0", "0", "0", "0"]);
    }
}

#[test]
fn hot_humid_dark_and_shaking_fires_everything() {
    let sample = Sample {
        temperature_c: 36.0,
        humidity_pct: 85.0,
        light_pct: 5.0,
        ..Sample::default()
    }
    .with_accel([2500, 0, 0]);

    let fired = alerts::evaluate(&sample, &AlertThresholds::default());
    assert_eq!(
        fired.as_slice(),
        &[Alert::HighTemperature, Alert::HighHumidity, Alert::LowLight, Alert::ExcessiveVibration]
    );

    let mut block = String::new();
    report::write_block(&mut block, &sample, &fired).unwrap();
    assert_eq!(
        alert_lines(&block),
        [
            "⚠️  ALERTA: Temperatura elevada!",
            "⚠️  ALERTA: Umidade muito alta!",
            "⚠️  ALERTA: Luminosidade muito baixa!",
            "⚠️  ALERTA: Vibração excessiva detectada!",
        ]
    );
}

#[test]
fn hot_humid_dark_and_shaking_through_the_node() {
    // 2.5 g on X, raw light 200 → 4 %
    let frame = Frame::calm()
        .with_climate(36.0, 85.0)
        .with_light(200)
        .with_accel([2.5, 0.0, 0.0]);
    let mut node = node(ScriptedPort::repeating(frame));

    let outcome = node.run_cycle(2000);

    assert_eq!(outcome.alerts.as_slice(), &Alert::ALL);
    assert_eq!(alert_lines(node.sink()).len(), 4);
}

#[test]
fn room_conditions_fire_nothing() {
    let sample = Sample {
        temperature_c: 25.0,
        humidity_pct: 50.0,
        light_pct: 50.0,
        ..Sample::default()
    }
    .with_accel([10, 10, 1000]);

    let fired = alerts::evaluate(&sample, &AlertThresholds::default());
    assert!(fired.is_empty());

    let mut block = String::new();
    report::write_block(&mut block, &sample, &fired).unwrap();
    assert!(alert_lines(&block).is_empty());
    assert!(block.ends_with("Giroscópio (mdps): X=0, Y=0, Z=0\n================================\n"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let sample = Sample {
        timestamp_s: 12,
        temperature_c: 35.5,
        humidity_pct: 81.25,
        light_pct: 9.0,
        ..Sample::default()
    }
    .with_accel([1200, 1200, 1200])
    .with_gyro([-15, 30, 0]);
    let fired = alerts::evaluate(&sample, &AlertThresholds::default());

    let render = || {
        let mut out = String::new();
        report::write_record(&mut out, &sample).unwrap();
        report::write_block(&mut out, &sample, &fired).unwrap();
        out
    };

    assert_eq!(render().as_bytes(), render().as_bytes());
}
