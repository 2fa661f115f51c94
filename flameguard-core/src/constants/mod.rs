//! Constants for FlameGuard Core
//!
//! This module centralizes every tunable of the flame discriminator with
//! documentation of its purpose, source, and rationale. All values were
//! measured or chosen against a five-element IR photodiode array on a
//! 3.3 V, 12-bit ADC platform.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Channels**: sensor array geometry and ADC characteristics
//! - **Sampling**: oversampling and settling parameters
//! - **Detection**: baseline, spike, and spatial-voting thresholds
//! - **Time**: cadence and persistence intervals
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose and source
//! 3. Runtime-tunable values take their defaults from here via
//!    [`DetectorConfig`](crate::config::DetectorConfig)

/// Sensor array geometry and ADC characteristics.
pub mod channels;

/// Oversampling counts and settling delays for analog reads.
pub mod sampling;

/// Baseline adaptation, spike margin, and spatial-voting thresholds.
pub mod detection;

/// Update cadence and persistence intervals.
pub mod time;

// Re-export commonly used constants for convenience
pub use channels::{NUM_CHANNELS, ADC_FULL_SCALE_MV};

pub use sampling::{OVERSAMPLING_SAMPLES, SETTLE_DELAY_US};

pub use detection::{
    EMA_ALPHA, SENSITIVITY_MARGIN_MV, AMBIENT_INTERFERENCE_MIN,
};

pub use time::{PERSISTENCE_WINDOW_MS, UPDATE_INTERVAL_MS};
