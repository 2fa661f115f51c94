//! Shared helpers for detector integration tests
//!
//! All scenarios run against the mock analog source and mock clock, so
//! every test is deterministic and hardware-free.

use flameguard_core::{FlameDetector, MockAnalogSource, MockTimeSource};

/// Detector under test, fully mocked.
pub type TestDetector = FlameDetector<MockAnalogSource, MockTimeSource>;

/// Standard update cadence used by the scenarios.
pub const CYCLE_MS: u64 = 50;

/// Detector with default configuration, clock at zero, all channels
/// dark.
pub fn detector() -> TestDetector {
    FlameDetector::new(MockAnalogSource::new(), MockTimeSource::new(0))
}

/// Advance the clock and run one cycle, asserting it executed.
pub fn cycle(det: &mut TestDetector, advance_ms: u64) {
    det.clock_mut().advance(advance_ms);
    assert!(det.update(), "cycle unexpectedly gated");
}

/// Drive cycles at the standard cadence until `duration_ms` has passed.
pub fn run_for(det: &mut TestDetector, duration_ms: u64) {
    let mut elapsed = 0;
    while elapsed < duration_ms {
        cycle(det, CYCLE_MS);
        elapsed += CYCLE_MS;
    }
}
