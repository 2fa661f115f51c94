//! Sensitivity Tuning and the Fast Probe
//!
//! This example covers the two knobs a host exposes to installers:
//!
//! - The runtime sensitivity margin, which trades false positives for
//!   detection distance.
//! - The fast threshold probe, a three-conversion "is anything
//!   unmistakably hot" check for fast-path polling between full
//!   detector cycles.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_sensitivity_and_probe
//! ```

use flameguard_core::{
    DetectionState, FlameDetector, MockAnalogSource, MockTimeSource, ThresholdProbe,
};

fn main() {
    println!("FlameGuard Sensitivity and Probe Example");
    println!("========================================\n");

    let mut detector = FlameDetector::new(MockAnalogSource::new(), MockTimeSource::new(0));

    // A weak, distant source: 350 mV over a zero baseline
    detector.source_mut().set_level(1, 350);

    println!("Default margin: {} mV", detector.sensitivity_margin_mv());
    step(&mut detector);
    println!("  350 mV source -> state {:?} (clears the margin)\n", detector.state());

    // Desensitize for a sunnier installation
    detector.set_sensitivity_margin_mv(600);
    step(&mut detector);
    println!("Margin raised to 600 mV");
    println!("  350 mV source -> state {:?} (ignored)\n", detector.state());

    assert_eq!(detector.state(), DetectionState::Idle);

    // The fast probe shares the analog source abstraction but keeps no
    // state at all: three conversions per channel, absolute threshold
    let probe = ThresholdProbe::default();
    let mut hot = MockAnalogSource::with_levels([120, 90, 2400, 150, 80]);

    println!("Fast probe (threshold {} mV):", probe.threshold_mv());
    println!("  max reading: {} mV", probe.max_reading(&mut hot));
    println!("  flame present: {}", probe.is_flame_present(&mut hot));

    let mut warm = MockAnalogSource::with_levels([400; 5]);
    println!("  warm ambient max: {} mV", probe.max_reading(&mut warm));
    println!("  flame present: {}", probe.is_flame_present(&mut warm));
}

fn step(detector: &mut FlameDetector<MockAnalogSource, MockTimeSource>) {
    detector.clock_mut().advance(50);
    detector.update();
}
