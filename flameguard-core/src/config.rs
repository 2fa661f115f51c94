//! Detector Configuration
//!
//! Every tunable of the discriminator in one place, defaulted from the
//! [`constants`](crate::constants) tree. Only the sensitivity margin is
//! runtime-adjustable after construction; everything else is fixed for
//! the detector's lifetime.
//!
//! Construction through [`FlameDetector::with_config`] validates the
//! configuration; values that cannot produce a functioning detector are
//! rejected with a [`ConfigError`] instead of misbehaving at runtime.
//!
//! [`FlameDetector::with_config`]: crate::detector::FlameDetector::with_config

use crate::{
    constants::{
        channels::NUM_CHANNELS,
        detection::{AMBIENT_INTERFERENCE_MIN, EMA_ALPHA, SENSITIVITY_MARGIN_MV},
        sampling::{OVERSAMPLING_SAMPLES, SETTLE_DELAY_US},
        time::{PERSISTENCE_WINDOW_MS, UPDATE_INTERVAL_MS},
    },
    errors::{ConfigError, ConfigResult},
};

/// Configuration for a [`FlameDetector`](crate::detector::FlameDetector).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Conversions averaged into one channel reading.
    pub oversampling_samples: u16,
    /// Settling pause between conversions, in microseconds.
    pub settle_delay_us: u32,
    /// EMA coefficient for baseline adaptation, in (0, 1].
    pub ema_alpha: f32,
    /// Spike margin in millivolts above baseline. Runtime-adjustable.
    pub sensitivity_margin_mv: u16,
    /// Minimum simultaneous spikes classified as ambient interference.
    pub ambient_interference_min: u8,
    /// Continuous point-source persistence required before confirming a
    /// flame, in milliseconds.
    pub persistence_window_ms: u64,
    /// Minimum interval between executed update cycles, in milliseconds.
    pub update_interval_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            oversampling_samples: OVERSAMPLING_SAMPLES,
            settle_delay_us: SETTLE_DELAY_US,
            ema_alpha: EMA_ALPHA,
            sensitivity_margin_mv: SENSITIVITY_MARGIN_MV,
            ambient_interference_min: AMBIENT_INTERFERENCE_MIN,
            persistence_window_ms: PERSISTENCE_WINDOW_MS,
            update_interval_ms: UPDATE_INTERVAL_MS,
        }
    }
}

impl DetectorConfig {
    /// Check the configuration can produce a functioning detector.
    ///
    /// The sensitivity margin is deliberately not validated: any
    /// unsigned value is accepted, matching the runtime setter. A zero
    /// update interval is allowed and means "run a cycle on every call".
    pub fn validate(&self) -> ConfigResult<()> {
        if self.oversampling_samples == 0 {
            return Err(ConfigError::ZeroOversampling);
        }

        // NaN fails this condition and is rejected with it
        if !(self.ema_alpha > 0.0 && self.ema_alpha <= 1.0) {
            return Err(ConfigError::InvalidAlpha {
                alpha: self.ema_alpha,
            });
        }

        if self.ambient_interference_min == 0
            || usize::from(self.ambient_interference_min) > NUM_CHANNELS
        {
            return Err(ConfigError::InvalidAmbientThreshold {
                threshold: self.ambient_interference_min,
                max: NUM_CHANNELS as u8,
            });
        }

        if self.persistence_window_ms == 0 {
            return Err(ConfigError::ZeroPersistenceWindow);
        }

        Ok(())
    }
}
