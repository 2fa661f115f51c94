//! Basic Flame Detection Example
//!
//! This example demonstrates the simplest use case of FlameGuard:
//! driving the five-channel discriminator through a scripted scenario
//! and watching it separate a localized flame from room-wide
//! interference.
//!
//! ## What You'll Learn
//!
//! - Constructing a detector with injected analog and time sources
//! - Driving the update loop and reading back detection state
//! - Why a point source must persist before it is confirmed
//! - What widespread activation does to the state machine
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_detection
//! ```

use flameguard_core::{DetectionState, FlameDetector, MockAnalogSource, MockTimeSource};

fn main() {
    println!("FlameGuard Basic Detection Example");
    println!("==================================\n");

    // Mocked hardware: in firmware these would be the ADC wrapper and a
    // hardware tick timer
    let mut detector = FlameDetector::new(MockAnalogSource::new(), MockTimeSource::new(0));
    detector.init();

    println!("Phase 1: quiet room");
    drive(&mut detector, 4);
    println!("  state: {:?}\n", detector.state());

    println!("Phase 2: candle lit in front of channel 2 (1200 mV)");
    detector.source_mut().set_level(2, 1200);
    drive(&mut detector, 1);
    println!("  state after first cycle: {:?}", detector.state());
    println!("  (point source seen - persistence window is running)\n");

    println!("Phase 3: the flame persists past the 500 ms window");
    drive(&mut detector, 10);
    println!("  state: {:?}", detector.state());
    println!("  flame detected: {}\n", detector.is_flame_detected());

    println!("{}", detector.status());
    println!("{}\n", detector.plotter_line());

    println!("Phase 4: candle out, direct sunlight floods the array");
    detector.source_mut().set_all([2600; 5]);
    drive(&mut detector, 1);
    println!("  state: {:?}", detector.state());
    println!("  widespread activation is interference, never a flame\n");

    println!("Phase 5: blinds closed");
    detector.source_mut().set_all([0; 5]);
    drive(&mut detector, 1);
    assert_eq!(detector.state(), DetectionState::Idle);
    println!("  state: {:?} - ready for the next event", detector.state());
}

/// Advance the mock clock one cadence step per cycle and update.
fn drive(detector: &mut FlameDetector<MockAnalogSource, MockTimeSource>, cycles: u32) {
    for _ in 0..cycles {
        detector.clock_mut().advance(50);
        detector.update();
    }
}
