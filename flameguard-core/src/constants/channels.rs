//! Sensor Array Geometry and ADC Characteristics
//!
//! The discriminator assumes a fixed linear array of IR photodiodes.
//! Channel identity and physical adjacency are defined purely by index
//! order (channel 0 borders channel 1, and so on); the spatial voting
//! logic depends on this ordering and it must never be permuted.

/// Number of IR photodiode channels in the array.
///
/// Fixed at five for the supported sensor head. The spatial voting
/// thresholds below are calibrated for this count; changing it requires
/// revisiting [`AMBIENT_INTERFERENCE_MIN`](super::detection::AMBIENT_INTERFERENCE_MIN).
///
/// Source: sensor head layout (five elements on a linear carrier)
pub const NUM_CHANNELS: usize = 5;

/// Full-scale ADC reading in millivolts.
///
/// 3.3 V reference on a 12-bit converter; readings above this indicate a
/// wiring or reference fault rather than a valid optical signal.
///
/// Source: ESP32-class ADC characteristics
pub const ADC_FULL_SCALE_MV: u16 = 3300;
