//! Core traits for rate estimators
//!
//! All estimators implement the base [`RateEstimator`] trait: they consume
//! arrival timestamps one at a time and produce a single interval estimate
//! once their sample window is full.

use core::fmt::Debug;

/// Error returned when an estimator is configured with unusable parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Fewer than two timestamps cannot form an interval
    TooFewSamples {
        requested: usize,
        minimum: usize,
    },
    /// Bin width must be finite and strictly positive
    InvalidBinWidth(f64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TooFewSamples { requested, minimum } => {
                write!(
                    f,
                    "too few samples: requested {}, need at least {}",
                    requested, minimum
                )
            }
            ConfigError::InvalidBinWidth(width) => {
                write!(f, "invalid bin width: {} (must be finite and > 0)", width)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Minimum window size: two timestamps give one interval
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Check a sample count against [`MIN_SAMPLE_COUNT`]
pub fn validate_sample_count(sample_count: usize) -> Result<(), ConfigError> {
    if sample_count < MIN_SAMPLE_COUNT {
        return Err(ConfigError::TooFewSamples {
            requested: sample_count,
            minimum: MIN_SAMPLE_COUNT,
        });
    }
    Ok(())
}

/// Check that a bin width is finite and strictly positive
pub fn validate_bin_width(bin_width: f64) -> Result<(), ConfigError> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Err(ConfigError::InvalidBinWidth(bin_width));
    }
    Ok(())
}

/// Core trait for single-shot interval estimators
///
/// An estimation cycle runs from construction (or [`reset`](Self::reset))
/// until the window holds [`capacity`](Self::capacity) timestamps. The
/// estimate is computed exactly once, on the call that fills the window;
/// later samples are ignored until the next reset.
pub trait RateEstimator: Clone + Debug {
    /// Record an arrival timestamp
    ///
    /// Returns `true` only on the call that completes the cycle.
    fn add_sample(&mut self, timestamp: f64) -> bool;

    /// Discard all samples and the last estimate, starting a new cycle
    fn reset(&mut self);

    /// Whether the current cycle has produced an estimate
    fn is_complete(&self) -> bool;

    /// Number of timestamps recorded in the current cycle
    fn len(&self) -> usize;

    /// Number of timestamps needed to complete a cycle
    fn capacity(&self) -> usize;

    /// Estimated interval in the estimator's time unit, `0.0` before completion
    fn interval(&self) -> f64;

    /// Estimated sampling frequency in Hz, `0.0` before completion
    fn frequency_hz(&self) -> f64;

    /// Check if no timestamps have been recorded
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Timestamps still needed before the estimate is available
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sample_count() {
        assert!(validate_sample_count(2).is_ok());
        assert!(validate_sample_count(51).is_ok());
        assert_eq!(
            validate_sample_count(1),
            Err(ConfigError::TooFewSamples {
                requested: 1,
                minimum: 2
            })
        );
        assert!(validate_sample_count(0).is_err());
    }

    #[test]
    fn test_validate_bin_width() {
        assert!(validate_bin_width(0.1).is_ok());
        assert!(validate_bin_width(10.0).is_ok());

        assert_eq!(validate_bin_width(0.0), Err(ConfigError::InvalidBinWidth(0.0)));
        assert!(validate_bin_width(-1.0).is_err());
        assert!(validate_bin_width(f64::INFINITY).is_err());
        assert!(validate_bin_width(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::TooFewSamples {
            requested: 1,
            minimum: 2,
        };
        assert_eq!(
            err.to_string(),
            "too few samples: requested 1, need at least 2"
        );

        let err = ConfigError::InvalidBinWidth(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }
}
