//! Fast Threshold Probe
//!
//! A low-latency companion to the adaptive discriminator. Where the
//! discriminator oversamples heavily and reasons about baselines and
//! persistence, the probe answers a cruder question — "is any channel
//! unmistakably hot right now" — with three conversions per channel and
//! a fixed absolute threshold. No baseline, no persistence, no state.
//!
//! Hosts use it for fast-path polling between full detector cycles,
//! where an extra few hundred milliseconds of alarm latency matters more
//! than ambient rejection.

use crate::{
    analog::AnalogSource,
    constants::{
        detection::FLAME_THRESHOLD_MV,
        sampling::{FAST_SAMPLE_COUNT, FAST_SETTLE_DELAY_US},
        NUM_CHANNELS,
    },
    sampler::ChannelSampler,
};

/// Fixed-threshold fast reader over the photodiode array.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdProbe {
    sampler: ChannelSampler,
    threshold_mv: u16,
}

impl Default for ThresholdProbe {
    fn default() -> Self {
        Self::new(FLAME_THRESHOLD_MV)
    }
}

impl ThresholdProbe {
    /// Create a probe with the default fast sampling and a custom
    /// threshold.
    pub fn new(threshold_mv: u16) -> Self {
        Self {
            sampler: ChannelSampler::new(FAST_SAMPLE_COUNT, FAST_SETTLE_DELAY_US),
            threshold_mv,
        }
    }

    /// Absolute threshold in millivolts.
    pub fn threshold_mv(&self) -> u16 {
        self.threshold_mv
    }

    /// Fast read of one channel (mean of three conversions). An
    /// out-of-range index yields 0.
    pub fn read_channel<S: AnalogSource>(&self, source: &mut S, channel: usize) -> u16 {
        self.sampler.read_channel(source, channel)
    }

    /// Maximum fast reading across all channels.
    pub fn max_reading<S: AnalogSource>(&self, source: &mut S) -> u16 {
        let mut max = 0u16;
        for channel in 0..NUM_CHANNELS {
            max = max.max(self.read_channel(source, channel));
        }
        max
    }

    /// True when any channel reads above the threshold.
    pub fn is_flame_present<S: AnalogSource>(&self, source: &mut S) -> bool {
        self.max_reading(source) > self.threshold_mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analog::MockAnalogSource;

    #[test]
    fn max_reading_scans_all_channels() {
        let probe = ThresholdProbe::default();
        let mut source = MockAnalogSource::with_levels([100, 900, 2200, 400, 0]);

        assert_eq!(probe.max_reading(&mut source), 2200);
        // 3 conversions x 5 channels
        assert_eq!(source.conversions(), 15);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let probe = ThresholdProbe::new(1500);

        let mut at_threshold = MockAnalogSource::with_levels([0, 0, 1500, 0, 0]);
        assert!(!probe.is_flame_present(&mut at_threshold));

        let mut above = MockAnalogSource::with_levels([0, 0, 1501, 0, 0]);
        assert!(probe.is_flame_present(&mut above));
    }

    #[test]
    fn out_of_range_channel_reads_zero() {
        let probe = ThresholdProbe::default();
        let mut source = MockAnalogSource::with_levels([500; 5]);

        assert_eq!(probe.read_channel(&mut source, NUM_CHANNELS), 0);
    }
}
