//! Per-Channel State
//!
//! One [`ChannelState`] exists per photodiode for the lifetime of the
//! detector — channels are fixed in count and identity; only their field
//! values mutate. The public read-only view is [`ChannelSnapshot`].

use crate::time::Timestamp;

/// Mutable per-channel record owned by the detector.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChannelState {
    /// Latest oversampled reading in millivolts
    pub raw_mv: u16,
    /// EMA-tracked ambient level; adapts slowly toward `raw_mv`
    pub baseline: f32,
    /// `raw_mv - baseline`, recomputed every cycle
    pub deviation: f32,
    /// Deviation exceeded the sensitivity margin this cycle
    pub is_spike: bool,
    /// When this channel last spiked. Diagnostic only - never read by
    /// decision logic
    pub last_spike_at: Option<Timestamp>,
}

impl ChannelState {
    pub(crate) const fn new() -> Self {
        Self {
            raw_mv: 0,
            baseline: 0.0,
            deviation: 0.0,
            is_spike: false,
            last_spike_at: None,
        }
    }

    /// Baseline reset: zero the baseline, clear the spike flag and its
    /// timestamp. The raw reading and deviation are left for the next
    /// cycle to overwrite.
    pub(crate) fn reset(&mut self) {
        self.baseline = 0.0;
        self.is_spike = false;
        self.last_spike_at = None;
    }

    pub(crate) fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            raw_mv: self.raw_mv,
            baseline: self.baseline,
            deviation: self.deviation,
            is_spike: self.is_spike,
            last_spike_at: self.last_spike_at,
        }
    }
}

/// Read-only copy of one channel's state, as exposed by the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSnapshot {
    /// Latest oversampled reading in millivolts.
    pub raw_mv: u16,
    /// EMA-tracked ambient level for this channel.
    pub baseline: f32,
    /// `raw_mv - baseline` at the last cycle.
    pub deviation: f32,
    /// Whether the deviation exceeded the sensitivity margin.
    pub is_spike: bool,
    /// Timestamp of the most recent spike, if any. Diagnostic only.
    pub last_spike_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_channel_is_zeroed() {
        let ch = ChannelState::new();
        assert_eq!(ch.raw_mv, 0);
        assert_eq!(ch.baseline, 0.0);
        assert!(!ch.is_spike);
        assert!(ch.last_spike_at.is_none());
    }

    #[test]
    fn reset_clears_baseline_and_spike_only() {
        let mut ch = ChannelState::new();
        ch.raw_mv = 1200;
        ch.baseline = 480.5;
        ch.deviation = 719.5;
        ch.is_spike = true;
        ch.last_spike_at = Some(42_000);

        ch.reset();

        assert_eq!(ch.baseline, 0.0);
        assert!(!ch.is_spike);
        assert!(ch.last_spike_at.is_none());
        // Raw reading survives; the next cycle overwrites it
        assert_eq!(ch.raw_mv, 1200);
    }
}
