//! Oversampling and Settling Parameters
//!
//! Analog reads are oversampled to suppress ADC quantization noise and
//! mains-frequency pickup. Larger sample counts trade per-cycle latency
//! for noise rejection; the defaults below keep a full five-channel
//! update in the low-millisecond range.

/// Conversions averaged into one channel reading.
///
/// 64 conversions reduce quantization noise by a factor of eight
/// (sqrt(64)) and span multiple mains cycles of pickup at typical
/// conversion rates.
///
/// Source: empirical tuning on the five-channel sensor head
pub const OVERSAMPLING_SAMPLES: u16 = 64;

/// Settling pause between consecutive conversions, in microseconds.
///
/// Lets the ADC sampling capacitor settle after each conversion so
/// successive readings are independent.
///
/// Source: ESP32 ADC application guidance
pub const SETTLE_DELAY_US: u32 = 10;

/// Conversions averaged by the fast threshold probe.
///
/// The probe trades noise rejection for latency; three conversions are
/// enough to debounce a single flickering read.
pub const FAST_SAMPLE_COUNT: u16 = 3;

/// Settling pause between fast-probe conversions, in microseconds.
pub const FAST_SETTLE_DELAY_US: u32 = 100;
