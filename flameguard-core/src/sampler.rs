//! Channel Sampler
//!
//! Produces one noise-reduced millivolt reading per channel by averaging
//! a burst of raw conversions. Oversampling suppresses ADC quantization
//! noise and mains-frequency pickup; the burst length and settling pause
//! are configurable, defaulting to the values the detection thresholds
//! were tuned against.
//!
//! The burst is a bounded busy-wait: 64 conversions with 10 µs settling
//! each, five channels per update cycle. This is the dominant latency
//! cost of an update and is the reason the detector rate-limits cycles.

use crate::{
    analog::AnalogSource,
    constants::{NUM_CHANNELS, OVERSAMPLING_SAMPLES, SETTLE_DELAY_US},
};

/// Oversampled reader for the photodiode array.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSampler {
    samples: u16,
    settle_us: u32,
}

impl Default for ChannelSampler {
    fn default() -> Self {
        Self::new(OVERSAMPLING_SAMPLES, SETTLE_DELAY_US)
    }
}

impl ChannelSampler {
    /// Create a sampler with a custom burst length and settling pause.
    ///
    /// A zero sample count is clamped to one; a reading must always be
    /// formed from at least one conversion.
    pub fn new(samples: u16, settle_us: u32) -> Self {
        Self {
            samples: samples.max(1),
            settle_us,
        }
    }

    /// Conversions averaged into one reading.
    pub fn samples(&self) -> u16 {
        self.samples
    }

    /// Read one channel: average of `samples` conversions, truncated to
    /// integer millivolts.
    ///
    /// An out-of-range channel index yields 0 without touching the
    /// source — a defensive default, not a reported fault.
    pub fn read_channel<S: AnalogSource>(&self, source: &mut S, channel: usize) -> u16 {
        if channel >= NUM_CHANNELS {
            return 0;
        }

        let mut total: u32 = 0;
        for _ in 0..self.samples {
            total += u32::from(source.read_millivolts(channel));
            source.settle_us(self.settle_us);
        }

        (total / u32::from(self.samples)) as u16
    }
}
