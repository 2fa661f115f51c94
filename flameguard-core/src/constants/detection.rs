//! Detection Thresholds
//!
//! Baseline adaptation rate, spike margin, and the spatial-voting
//! threshold that separates a localized point source from room-wide
//! ambient interference.

/// EMA coefficient for the per-channel ambient baseline.
///
/// α = 0.01 gives each baseline a time constant of roughly 100 update
/// cycles (~5 s at the 50 ms cadence): slow enough that a seconds-scale
/// flame spike is not absorbed into the baseline, fast enough to track
/// sun-angle and lighting drift over minutes.
///
/// Source: empirical tuning against sunlight drift recordings
pub const EMA_ALPHA: f32 = 0.01;

/// Default spike margin in millivolts above baseline.
///
/// A channel spikes when its reading exceeds its own baseline by more
/// than this margin. Runtime-adjustable through the detector.
///
/// Source: ~3x observed peak-to-peak ambient noise after oversampling
pub const SENSITIVITY_MARGIN_MV: u16 = 300;

/// Minimum simultaneous spiking channels classified as ambient interference.
///
/// Four or five of five channels activating together is the signature of
/// a room-filling IR source (direct sunlight, reflected heat), not a
/// localized flame at a fixed array.
///
/// Source: field observation of direct-sunlight activation patterns
pub const AMBIENT_INTERFERENCE_MIN: u8 = 4;

/// Absolute millivolt threshold for the fast probe.
///
/// The probe has no baseline; any channel reading above this level is
/// treated as a hot source. Deliberately high so the probe only fires on
/// unmistakable signals.
///
/// Source: near-flame reading floor measured at 0.5 m
pub const FLAME_THRESHOLD_MV: u16 = 1500;
