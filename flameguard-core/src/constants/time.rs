//! Cadence and Persistence Intervals
//!
//! All intervals are measured against a monotonic millisecond clock
//! supplied through [`TimeSource`](crate::time::TimeSource).

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Minimum continuous point-source persistence before confirming a flame.
///
/// Debounces transient glints (sparks, camera flashes) that present as a
/// momentary point source but do not sustain. A real flame holds its
/// spatial pattern well beyond this window.
///
/// Source: spark/flash rejection testing; glints die out inside ~200 ms
pub const PERSISTENCE_WINDOW_MS: u64 = 500;

/// Minimum interval between executed update cycles.
///
/// Rate-limits the oversampled analog reads (320 conversions per cycle)
/// and anchors the EMA time-constant assumption: the baseline α is tuned
/// for this cadence.
///
/// Source: timing headroom measured in the host control loop
pub const UPDATE_INTERVAL_MS: u64 = 50;
