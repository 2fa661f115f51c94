//! Detector Façade and State Machine
//!
//! ## Overview
//!
//! [`FlameDetector`] orchestrates the full discrimination chain on a
//! fixed cadence: oversampled sampling of all five channels, baseline
//! adaptation, spike classification, spatial-pattern voting, and
//! temporal persistence verification. The result is a four-state machine
//! whose `Detected` state is the crate's "flame detected" signal.
//!
//! ## State machine
//!
//! ```text
//!            point source                 held >= window
//!   Idle ───────────────────> Potential ─────────────────> Detected
//!    ^                            │                            │
//!    │        quiet (k == 0)      │     quiet (k == 0)         │
//!    └────────────────────────────┴────────────────────────────┘
//!
//!   any state ── k >= ambient threshold ──> AmbientInterference
//!   AmbientInterference ── quiet ──> Idle
//! ```
//!
//! A quiet cycle returns every state to `Idle` and clears the
//! persistence timestamp: a dropped spike aborts the window with no
//! partial credit, and a later re-detection must earn a fresh full
//! window. Ambiguous patterns (two non-adjacent spikes, or three
//! spikes) make no transition at all — state and timer are left exactly
//! as they were.
//!
//! While a point source holds, a confirmed detector passes through
//! `Potential` and is re-promoted within the same cycle (the timestamp
//! is retained across the promotion), so `Detected` is stable from the
//! caller's point of view for as long as the flame persists.
//!
//! ## Ownership
//!
//! The detector owns its analog source and clock and is driven from a
//! single control loop; `update` never blocks indefinitely, but an
//! executed cycle performs the full oversampled read burst (320
//! conversions) before returning. No concurrent invocation is supported
//! or required.

use heapless::Vec;

use crate::{
    analog::AnalogSource,
    baseline,
    channel::{ChannelSnapshot, ChannelState},
    config::DetectorConfig,
    constants::NUM_CHANNELS,
    errors::ConfigResult,
    sampler::ChannelSampler,
    spatial::{self, SpatialPattern},
    spike,
    time::{TimeSource, Timestamp},
};

/// Detection state exposed by the façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectionState {
    /// No activity on the array.
    Idle,
    /// A point-source pattern is present and the persistence window is
    /// running.
    Potential,
    /// A point source persisted for the full window - flame confirmed.
    Detected,
    /// Widespread simultaneous activation - room-wide IR source, not a
    /// flame.
    AmbientInterference,
}

impl DetectionState {
    /// Short uppercase name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            DetectionState::Idle => "IDLE",
            DetectionState::Potential => "POTENTIAL",
            DetectionState::Detected => "DETECTED",
            DetectionState::AmbientInterference => "AMBIENT_INTERFERENCE",
        }
    }
}

/// Adaptive five-channel flame discriminator.
///
/// Generic over its injected capabilities: `S` supplies raw ADC
/// conversions, `C` supplies monotonic milliseconds. Both are owned by
/// the detector for its lifetime.
pub struct FlameDetector<S: AnalogSource, C: TimeSource> {
    source: S,
    clock: C,
    sampler: ChannelSampler,
    channels: [ChannelState; NUM_CHANNELS],
    state: DetectionState,
    potential_since: Option<Timestamp>,
    last_update_at: Option<Timestamp>,
    config: DetectorConfig,
}

impl<S: AnalogSource, C: TimeSource> FlameDetector<S, C> {
    /// Create a detector with the default configuration.
    pub fn new(source: S, clock: C) -> Self {
        // Default config is valid by construction
        Self::build(source, clock, DetectorConfig::default())
    }

    /// Create a detector with a custom configuration, validating it
    /// first.
    pub fn with_config(source: S, clock: C, config: DetectorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(source, clock, config))
    }

    fn build(source: S, clock: C, config: DetectorConfig) -> Self {
        Self {
            source,
            clock,
            sampler: ChannelSampler::new(config.oversampling_samples, config.settle_delay_us),
            channels: [ChannelState::new(); NUM_CHANNELS],
            state: DetectionState::Idle,
            potential_since: None,
            last_update_at: None,
            config,
        }
    }

    /// Log the active configuration. No functional effect on state.
    pub fn init(&self) {
        #[cfg(feature = "std")]
        {
            log::info!("initializing {}-channel flame discriminator", NUM_CHANNELS);
            log::info!(
                "oversampling: {} conversions per reading, {} us settle",
                self.config.oversampling_samples,
                self.config.settle_delay_us,
            );
            log::info!("ema alpha: {}", self.config.ema_alpha);
            log::info!("sensitivity margin: {} mV", self.config.sensitivity_margin_mv);
            log::info!("persistence window: {} ms", self.config.persistence_window_ms);
            log::info!(
                "ambient interference threshold: {} channels",
                self.config.ambient_interference_min,
            );
        }
    }

    /// Run one detection cycle if the update interval has elapsed.
    ///
    /// Returns `true` when a cycle executed, `false` when the call was
    /// gated. The first call after construction always executes. An
    /// executed cycle performs, in order: sample all channels, update
    /// baselines and classify spikes, evaluate the spatial pattern,
    /// evaluate temporal persistence.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now();

        if let Some(last) = self.last_update_at {
            if now.saturating_sub(last) < self.config.update_interval_ms {
                return false;
            }
        }
        self.last_update_at = Some(now);

        for i in 0..NUM_CHANNELS {
            let raw = self.sampler.read_channel(&mut self.source, i);
            baseline::apply_reading(&mut self.channels[i], raw, self.config.ema_alpha);
            spike::classify(&mut self.channels[i], self.config.sensitivity_margin_mv, now);
        }

        self.evaluate_spatial(now);
        self.evaluate_temporal(now);

        true
    }

    fn evaluate_spatial(&mut self, now: Timestamp) {
        let flags = self.spike_flags();

        match spatial::classify(&flags, self.config.ambient_interference_min) {
            SpatialPattern::Quiet => {
                self.state = DetectionState::Idle;
                self.potential_since = None;
            }
            SpatialPattern::AmbientInterference => {
                self.state = DetectionState::AmbientInterference;
                self.potential_since = None;
            }
            SpatialPattern::PointSource => {
                self.state = DetectionState::Potential;
                if self.potential_since.is_none() {
                    self.potential_since = Some(now);
                }
            }
            // No claim either way: state and timer untouched
            SpatialPattern::Ambiguous => {}
        }
    }

    fn evaluate_temporal(&mut self, now: Timestamp) {
        if self.state != DetectionState::Potential {
            return;
        }

        if let Some(since) = self.potential_since {
            let held = now.saturating_sub(since);
            if held >= self.config.persistence_window_ms {
                self.state = DetectionState::Detected;
                #[cfg(feature = "std")]
                log::info!("flame confirmed after {} ms persistence", held);
            }
        }
    }

    fn spike_flags(&self) -> [bool; NUM_CHANNELS] {
        let mut flags = [false; NUM_CHANNELS];
        for (flag, ch) in flags.iter_mut().zip(self.channels.iter()) {
            *flag = ch.is_spike;
        }
        flags
    }

    /// Current detection state.
    pub fn state(&self) -> DetectionState {
        self.state
    }

    /// True iff the state is [`DetectionState::Detected`].
    pub fn is_flame_detected(&self) -> bool {
        self.state == DetectionState::Detected
    }

    /// Snapshot of one channel, or `None` for an out-of-range index.
    pub fn channel(&self, channel: usize) -> Option<ChannelSnapshot> {
        self.channels.get(channel).map(ChannelState::snapshot)
    }

    /// All raw readings from the last cycle.
    pub fn raw_values(&self) -> [u16; NUM_CHANNELS] {
        let mut values = [0u16; NUM_CHANNELS];
        for (v, ch) in values.iter_mut().zip(self.channels.iter()) {
            *v = ch.raw_mv;
        }
        values
    }

    /// All channel baselines.
    pub fn baselines(&self) -> [f32; NUM_CHANNELS] {
        let mut values = [0.0f32; NUM_CHANNELS];
        for (v, ch) in values.iter_mut().zip(self.channels.iter()) {
            *v = ch.baseline;
        }
        values
    }

    /// Number of channels currently spiking.
    pub fn spike_count(&self) -> u8 {
        spatial::count_spikes(&self.spike_flags())
    }

    /// Indices of the channels currently spiking, in array order.
    pub fn spiking_channels(&self) -> Vec<u8, NUM_CHANNELS> {
        let mut spiking = Vec::new();
        for (i, ch) in self.channels.iter().enumerate() {
            if ch.is_spike {
                // Capacity equals the channel count, push cannot fail
                let _ = spiking.push(i as u8);
            }
        }
        spiking
    }

    /// Current sensitivity margin in millivolts.
    pub fn sensitivity_margin_mv(&self) -> u16 {
        self.config.sensitivity_margin_mv
    }

    /// Set the sensitivity margin. Takes effect on the next cycle; any
    /// value is accepted.
    pub fn set_sensitivity_margin_mv(&mut self, margin_mv: u16) {
        self.config.sensitivity_margin_mv = margin_mv;
        #[cfg(feature = "std")]
        log::info!("sensitivity margin updated to {} mV", margin_mv);
    }

    /// Active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Zero all baselines, clear spike flags and spike timestamps,
    /// return to [`DetectionState::Idle`] with the persistence timer
    /// cleared. Idempotent.
    pub fn reset_baselines(&mut self) {
        #[cfg(feature = "std")]
        log::info!("resetting channel baselines");

        for ch in self.channels.iter_mut() {
            ch.reset();
        }
        self.state = DetectionState::Idle;
        self.potential_since = None;
    }

    /// Mutable access to the analog source (test doubles, host-side
    /// maintenance).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Mutable access to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
