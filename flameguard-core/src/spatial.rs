//! Spatial Pattern Evaluator
//!
//! Interprets the set of currently-spiking channels. The array is linear
//! (channel 0 borders channel 1, and so on), so a localized flame lights
//! one element, or two neighboring elements as it straddles their fields
//! of view. A room-filling IR source — direct sunlight, a reflected heat
//! plume — lights most of the array at once. Counting and adjacency are
//! therefore enough to separate the two:
//!
//! | spiking channels `k`       | classification        |
//! |----------------------------|-----------------------|
//! | 0                          | quiet                 |
//! | 1                          | point source          |
//! | 2, physically adjacent     | point source          |
//! | 2, non-adjacent            | ambiguous             |
//! | 3                          | ambiguous             |
//! | ≥ 4 (threshold)            | ambient interference  |
//!
//! The ambient test runs before the point-source test, so a pattern that
//! clears the ambient threshold is never misread as a flame regardless
//! of adjacency. Ambiguous patterns make no claim either way; the state
//! machine leaves its state untouched for them.
//!
//! Everything here is pure and stateless; temporal semantics live in the
//! detector.

use crate::constants::NUM_CHANNELS;

/// Classification of one cycle's spike pattern across the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpatialPattern {
    /// No channel is spiking.
    Quiet,
    /// One channel, or two physically adjacent channels - the signature
    /// of a localized flame.
    PointSource,
    /// A pattern that fits neither a point source nor ambient
    /// interference; no claim is made.
    Ambiguous,
    /// Widespread simultaneous activation - the signature of a
    /// room-filling IR source.
    AmbientInterference,
}

/// Count spiking channels.
pub fn count_spikes(spikes: &[bool; NUM_CHANNELS]) -> u8 {
    spikes.iter().filter(|&&s| s).count() as u8
}

/// True when two channel indices are physically adjacent (differ by
/// exactly 1) and both are valid.
pub fn channels_adjacent(a: usize, b: usize) -> bool {
    a < NUM_CHANNELS && b < NUM_CHANNELS && a.abs_diff(b) == 1
}

/// True when some neighboring pair is spiking together.
fn has_adjacent_pair(spikes: &[bool; NUM_CHANNELS]) -> bool {
    spikes.windows(2).any(|pair| pair[0] && pair[1])
}

/// Classify a spike pattern.
///
/// `ambient_min` is the minimum simultaneous spike count treated as
/// ambient interference; it is checked before the point-source test.
pub fn classify(spikes: &[bool; NUM_CHANNELS], ambient_min: u8) -> SpatialPattern {
    let k = count_spikes(spikes);

    if k == 0 {
        SpatialPattern::Quiet
    } else if k >= ambient_min {
        SpatialPattern::AmbientInterference
    } else if k == 1 || (k == 2 && has_adjacent_pair(spikes)) {
        SpatialPattern::PointSource
    } else {
        SpatialPattern::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AMBIENT_INTERFERENCE_MIN;

    fn classify_default(spikes: [bool; NUM_CHANNELS]) -> SpatialPattern {
        classify(&spikes, AMBIENT_INTERFERENCE_MIN)
    }

    #[test]
    fn quiet_array() {
        assert_eq!(classify_default([false; 5]), SpatialPattern::Quiet);
    }

    #[test]
    fn single_spike_is_point_source() {
        for i in 0..NUM_CHANNELS {
            let mut spikes = [false; 5];
            spikes[i] = true;
            assert_eq!(classify_default(spikes), SpatialPattern::PointSource);
        }
    }

    #[test]
    fn adjacent_pair_is_point_source() {
        for i in 0..NUM_CHANNELS - 1 {
            let mut spikes = [false; 5];
            spikes[i] = true;
            spikes[i + 1] = true;
            assert_eq!(classify_default(spikes), SpatialPattern::PointSource);
        }
    }

    #[test]
    fn non_adjacent_pair_is_ambiguous() {
        assert_eq!(
            classify_default([true, false, true, false, false]),
            SpatialPattern::Ambiguous
        );
        assert_eq!(
            classify_default([true, false, false, false, true]),
            SpatialPattern::Ambiguous
        );
    }

    #[test]
    fn three_spikes_are_ambiguous_even_when_contiguous() {
        assert_eq!(
            classify_default([true, true, true, false, false]),
            SpatialPattern::Ambiguous
        );
    }

    #[test]
    fn four_or_more_spikes_are_ambient() {
        assert_eq!(
            classify_default([true, true, true, true, false]),
            SpatialPattern::AmbientInterference
        );
        assert_eq!(
            classify_default([true; 5]),
            SpatialPattern::AmbientInterference
        );
        // Adjacency is irrelevant above the threshold
        assert_eq!(
            classify_default([true, true, false, true, true]),
            SpatialPattern::AmbientInterference
        );
    }

    #[test]
    fn adjacency_predicate() {
        assert!(channels_adjacent(0, 1));
        assert!(channels_adjacent(3, 2));
        assert!(!channels_adjacent(1, 3));
        assert!(!channels_adjacent(2, 2));
        assert!(!channels_adjacent(4, 5));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The truth table over arbitrary masks: classification is a
            /// total function of the count and adjacency alone.
            #[test]
            fn truth_table_holds(spikes in proptest::array::uniform5(any::<bool>())) {
                let k = count_spikes(&spikes);
                let pattern = classify(&spikes, AMBIENT_INTERFERENCE_MIN);

                let expected = match k {
                    0 => SpatialPattern::Quiet,
                    1 => SpatialPattern::PointSource,
                    2 if spikes.windows(2).any(|p| p[0] && p[1]) => SpatialPattern::PointSource,
                    2 | 3 => SpatialPattern::Ambiguous,
                    _ => SpatialPattern::AmbientInterference,
                };
                prop_assert_eq!(pattern, expected);
            }
        }
    }
}
