//! Integration Tests für die Entfernungsmessung
//!
//! Laufen auf dem Host (x86_64) gegen MockHardwareIo

mod common;

use std::time::Duration;

use common::{EchoPulse, MockHardwareIo};
use embassy_futures::block_on;
use esp_core::{EchoEdge, LogEvent, RangeSensor, SensorConfig, SensorError};

fn assert_cm(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.05,
        "expected {expected} cm, got {actual} cm"
    );
}

// ============================================================================
// Tests: Einzelmessung
// ============================================================================

#[test]
fn test_sample_converts_echo_width() {
    let mut hw = MockHardwareIo::new();
    hw.push_pulse(EchoPulse::Width(5831)); // ≈ 100 cm

    let sensor = RangeSensor::default();
    let cm = block_on(sensor.sample(&mut hw)).unwrap();

    assert_cm(cm, 100.0);
    assert_eq!(hw.trigger_count, 1);
}

#[test]
fn test_sample_timeout_on_silent_echo() {
    let mut hw = MockHardwareIo::new();
    hw.push_pulse(EchoPulse::Silent);

    let sensor = RangeSensor::default();
    let result = block_on(sensor.sample(&mut hw));

    assert_eq!(
        result,
        Err(SensorError::Timeout {
            edge: EchoEdge::Rising
        })
    );
    // Wartezeit ist begrenzt
    assert!(hw.elapsed() < Duration::from_millis(41));
}

#[test]
fn test_sample_timeout_on_stuck_high_echo() {
    let mut hw = MockHardwareIo::new();
    hw.push_pulse(EchoPulse::StuckHigh);

    let sensor = RangeSensor::default();
    let result = block_on(sensor.sample(&mut hw));

    assert_eq!(
        result,
        Err(SensorError::Timeout {
            edge: EchoEdge::Falling
        })
    );
}

// ============================================================================
// Tests: Messzyklus
// ============================================================================

#[test]
fn test_measure_returns_mean_of_valid_samples() {
    let mut hw = MockHardwareIo::new();
    for cm in [50.0, 100.0, 150.0, 200.0, 250.0] {
        hw.push_pulse(EchoPulse::for_cm(cm));
    }

    let reading = block_on(RangeSensor::default().measure(&mut hw));

    assert_cm(reading.cm(), 150.0);
    assert_eq!(hw.trigger_count, 5);
}

#[test]
fn test_measure_drops_implausible_samples() {
    let mut hw = MockHardwareIo::new();
    hw.push_pulse(EchoPulse::for_cm(60.0));
    hw.push_pulse(EchoPulse::Width(50)); // < 2 cm
    hw.push_pulse(EchoPulse::for_cm(100.0));
    hw.push_pulse(EchoPulse::Width(38_000)); // kein Hindernis, > 400 cm
    hw.push_pulse(EchoPulse::for_cm(80.0));

    let reading = block_on(RangeSensor::default().measure(&mut hw));

    assert_cm(reading.cm(), 80.0);
    assert_eq!(hw.timeouts(), 0);
}

#[test]
fn test_measure_without_valid_sample_is_sentinel() {
    let mut hw = MockHardwareIo::new();
    for _ in 0..5 {
        hw.push_pulse(EchoPulse::Width(50));
    }

    let reading = block_on(RangeSensor::default().measure(&mut hw));

    assert!(reading.is_none());
    assert_eq!(reading.cm(), 0.0);
    assert_eq!(hw.trigger_count, 5);
}

#[test]
fn test_measure_spaces_samples() {
    let mut hw = MockHardwareIo::new();
    hw.push_reading_cm(100.0);

    block_on(RangeSensor::default().measure(&mut hw));

    // 5 x (10 µs Trigger + 10 ms Pause)
    assert_eq!(
        hw.sleep_total,
        Duration::from_micros(10) * 5 + Duration::from_millis(10) * 5
    );
}

#[test]
fn test_measure_timeout_ends_cycle_with_sentinel() {
    let mut hw = MockHardwareIo::new();
    hw.push_pulse(EchoPulse::for_cm(100.0));
    hw.push_pulse(EchoPulse::Silent);
    hw.push_pulse(EchoPulse::for_cm(100.0));

    let reading = block_on(RangeSensor::default().measure(&mut hw));

    assert!(reading.is_none());
    assert_eq!(hw.trigger_count, 2);
    assert_eq!(
        hw.events,
        vec![LogEvent::SensorTimeout {
            edge: EchoEdge::Rising
        }]
    );
}

#[test]
fn test_measure_respects_sample_count() {
    let mut hw = MockHardwareIo::new();
    hw.push_reading_cm(70.0);

    let sensor = RangeSensor::new(SensorConfig {
        samples: 3,
        ..SensorConfig::default()
    });
    let reading = block_on(sensor.measure(&mut hw));

    assert_cm(reading.cm(), 70.0);
    assert_eq!(hw.trigger_count, 3);
}
