//! Time Sources for the Discriminator
//!
//! The persistence window and the update-rate gate are both interval
//! measurements, so the detector only needs a monotonic millisecond
//! counter. The [`TimeSource`] trait abstracts where that counter comes
//! from: a hardware tick timer on bare metal, `Instant` on hosted
//! targets, or a hand-advanced mock in tests.
//!
//! Wall-clock time is deliberately not modeled — it can jump backwards
//! under NTP adjustment, which would corrupt interval math.

/// Timestamp in milliseconds since an arbitrary monotonic origin
/// (typically device boot).
pub type Timestamp = u64;

/// Source of monotonic time for the detector.
///
/// Implementations must never move backwards; the detector computes
/// intervals with saturating subtraction but a retreating clock would
/// still stretch the persistence window unpredictably.
pub trait TimeSource {
    /// Current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Monotonic time backed by [`std::time::Instant`].
///
/// Counts milliseconds since construction.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicTime {
    /// Create a source whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }
}

/// Controllable time source for deterministic tests.
#[derive(Debug, Clone)]
pub struct MockTimeSource {
    now_ms: Timestamp,
}

impl MockTimeSource {
    /// Create a mock starting at the given timestamp.
    pub fn new(now_ms: Timestamp) -> Self {
        Self { now_ms }
    }

    /// Jump to an absolute timestamp.
    pub fn set(&mut self, now_ms: Timestamp) {
        self.now_ms = now_ms;
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_advances() {
        let mut time = MockTimeSource::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10_000);
        assert_eq!(time.now(), 10_000);
    }

    #[cfg(feature = "std")]
    #[test]
    fn monotonic_time_starts_near_zero() {
        let time = MonotonicTime::new();
        // Construction to first read is far below a second
        assert!(time.now() < 1000);
    }
}
