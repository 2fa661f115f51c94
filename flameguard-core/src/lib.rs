//! Flame discrimination engine for FlameGuard
//!
//! Separates a real flame from ambient infrared interference (sunlight,
//! reflections, heat sources) using five fixed-position photodiode
//! channels. The chain: oversampled sampling, a slow-adapting EMA
//! baseline per channel, spike classification against a shared margin,
//! spatial-pattern voting across the array, and temporal persistence
//! verification before the flame is confirmed.
//!
//! Key constraints:
//! - Runs on microcontroller-class targets (`no_std`, no heap in the
//!   update path)
//! - Hardware injected through traits, fully testable without an ADC
//! - Single-threaded cooperative driving from a host control loop
//!
//! ```
//! use flameguard_core::{FlameDetector, MockAnalogSource, MockTimeSource, DetectionState};
//!
//! let mut detector = FlameDetector::new(MockAnalogSource::new(), MockTimeSource::new(0));
//! detector.init();
//!
//! // One hot channel: a candidate point source
//! detector.source_mut().set_level(2, 1200);
//! detector.update();
//! assert_eq!(detector.state(), DetectionState::Potential);
//!
//! // Persist past the 500 ms window to confirm
//! detector.clock_mut().advance(500);
//! detector.update();
//! assert!(detector.is_flame_detected());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analog;
pub mod baseline;
pub mod channel;
pub mod config;
pub mod constants;
pub mod detector;
pub mod diagnostics;
pub mod errors;
pub mod probe;
pub mod sampler;
pub mod spatial;
pub mod spike;
pub mod time;

// Public API
pub use analog::{AnalogSource, MockAnalogSource};
pub use channel::ChannelSnapshot;
pub use config::DetectorConfig;
pub use detector::{DetectionState, FlameDetector};
pub use errors::{ConfigError, ConfigResult};
pub use probe::ThresholdProbe;
pub use spatial::SpatialPattern;
pub use time::{MockTimeSource, TimeSource, Timestamp};

#[cfg(feature = "std")]
pub use time::MonotonicTime;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
