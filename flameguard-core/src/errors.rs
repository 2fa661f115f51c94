//! Error Types for Detector Construction
//!
//! The detection path itself raises no errors: out-of-range channel
//! indices read as zero, readings are unsigned, and the host loop's
//! repeated invocation is the retry mechanism for transient noise. The
//! only fallible surface is validated construction — a configuration
//! that cannot produce a functioning detector is rejected up front
//! rather than misbehaving silently at runtime.
//!
//! Errors follow the same constraints as the rest of the crate:
//! - **Small and Copy**: no heap data, cheap to return and store
//! - **Actionable**: each variant names the offending value
//! - **no_std**: built on `thiserror-no-std`, `defmt`-formattable on
//!   embedded targets

use thiserror_no_std::Error;

/// Result type for detector configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected detector configurations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Oversampling count of zero - a reading cannot be formed
    #[error("oversampling sample count must be at least 1")]
    ZeroOversampling,

    /// EMA coefficient outside (0, 1] - the baseline would never adapt
    /// (or diverge)
    #[error("EMA alpha {alpha} outside (0, 1]")]
    InvalidAlpha {
        /// The rejected coefficient
        alpha: f32,
    },

    /// Ambient-interference threshold of zero or above the channel count
    #[error("ambient interference threshold {threshold} outside [1, {max}]")]
    InvalidAmbientThreshold {
        /// The rejected threshold
        threshold: u8,
        /// Number of channels in the array
        max: u8,
    },

    /// Persistence window of zero - every glint would confirm instantly
    #[error("persistence window must be non-zero")]
    ZeroPersistenceWindow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroOversampling =>
                defmt::write!(fmt, "oversampling count must be >= 1"),
            Self::InvalidAlpha { alpha } =>
                defmt::write!(fmt, "EMA alpha {} outside (0, 1]", alpha),
            Self::InvalidAmbientThreshold { threshold, max } =>
                defmt::write!(fmt, "ambient threshold {} outside [1, {}]", threshold, max),
            Self::ZeroPersistenceWindow =>
                defmt::write!(fmt, "persistence window must be non-zero"),
        }
    }
}
