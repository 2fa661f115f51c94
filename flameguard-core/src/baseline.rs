//! Baseline Tracker
//!
//! Maintains one exponentially-weighted moving average per channel
//! representing "ambient level without flame". The recurrence is
//!
//! ```text
//! baseline ← α·raw + (1−α)·baseline
//! ```
//!
//! With the default α = 0.01 the baseline has a time constant of roughly
//! 1/α update cycles (~100 cycles, ~5 s at the 50 ms cadence) before it
//! meaningfully tracks a sustained level change. That inertia is the
//! point: a genuine flame spike is seconds-scale and is not absorbed,
//! while slow ambient drift (sun angle, lighting changes over minutes)
//! is tracked out.
//!
//! The baseline is a pure function of past raw readings via the
//! recurrence; it never jumps discontinuously except on explicit reset.

use crate::channel::ChannelState;

/// One step of the EMA recurrence.
pub fn ema_step(baseline: f32, raw_mv: u16, alpha: f32) -> f32 {
    alpha * raw_mv as f32 + (1.0 - alpha) * baseline
}

/// Apply one cycle's reading to a channel: advance the baseline, then
/// recompute the deviation against the new baseline.
pub(crate) fn apply_reading(channel: &mut ChannelState, raw_mv: u16, alpha: f32) {
    channel.raw_mv = raw_mv;
    channel.baseline = ema_step(channel.baseline, raw_mv, alpha);
    channel.deviation = raw_mv as f32 - channel.baseline;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EMA_ALPHA;

    #[test]
    fn converges_to_constant_input() {
        // From baseline 0 under constant input v, after n steps the
        // baseline equals v·(1−(1−α)^n)
        let v: u16 = 1000;
        let n = 100;

        let mut baseline = 0.0f32;
        for _ in 0..n {
            baseline = ema_step(baseline, v, EMA_ALPHA);
        }

        let expected = v as f32 * (1.0 - (1.0 - EMA_ALPHA).powi(n));
        assert!((baseline - expected).abs() < 0.5, "got {baseline}, expected {expected}");
        // ~63% of the way there after one time constant
        assert!(baseline > 600.0 && baseline < 660.0);
    }

    #[test]
    fn spike_is_not_absorbed_quickly() {
        // A flame-scale step barely moves the baseline in a few cycles
        let mut ch = ChannelState::new();
        ch.baseline = 200.0;

        for _ in 0..10 {
            apply_reading(&mut ch, 1200, EMA_ALPHA);
        }

        // Ten cycles move the baseline less than 10% of the step
        assert!(ch.baseline < 300.0);
        assert!(ch.deviation > 900.0);
    }

    #[test]
    fn deviation_uses_post_update_baseline() {
        let mut ch = ChannelState::new();
        apply_reading(&mut ch, 1000, EMA_ALPHA);

        // baseline = 10 after the first cycle, deviation = 990
        assert!((ch.baseline - 10.0).abs() < 1e-3);
        assert!((ch.deviation - 990.0).abs() < 1e-3);
    }
}
