//! Sampling rate estimation from arrival timestamps
//!
//! This module provides estimators that recover the true sampling period of a
//! periodic source observed through a jittery path.
//!
//! # Algorithms
//!
//! - [`IntervalModeEstimator`]: most frequent interval bin, robust to outliers
//! - [`MeanIntervalEstimator`]: arithmetic mean, for comparison
//!
//! # Example
//!
//! ```
//! use jitterstats::rate::{IntervalModeEstimator, MeanIntervalEstimator};
//!
//! let mut mode = IntervalModeEstimator::new(1.0, 8).unwrap();
//! let mut mean = MeanIntervalEstimator::new(8).unwrap();
//!
//! // 100 ms source with one 200 ms scheduling stall
//! for t in [0.0, 100.0, 200.0, 300.0, 500.0, 600.0, 700.0, 800.0] {
//!     mode.add_sample(t);
//!     mean.add_sample(t);
//! }
//!
//! assert_eq!(mode.interval(), 100.0);
//! assert!(mean.interval() > 110.0);
//! ```

mod histogram;
mod mean;
mod mode;
mod unit;
mod window;

#[cfg(feature = "std")]
mod clock;

pub use histogram::{HistogramBin, IntervalHistogram};
pub use mean::MeanIntervalEstimator;
pub use mode::{
    estimate_from_intervals, Estimate, EstimateMethod, IntervalModeEstimator, ModeEstimatorConfig,
};
pub use unit::TimeUnit;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use clock::MonotonicClock;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Gaps between consecutive timestamps
///
/// Returns `timestamps.len() - 1` values, or an empty vector for fewer than
/// two timestamps.
///
/// ```
/// use jitterstats::rate::intervals_from_timestamps;
///
/// assert_eq!(intervals_from_timestamps(&[0.0, 100.0, 190.0]), vec![100.0, 90.0]);
/// ```
pub fn intervals_from_timestamps(timestamps: &[f64]) -> Vec<f64> {
    timestamps.windows(2).map(|w| w[1] - w[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_from_timestamps() {
        let ts = [0.0, 100.0, 200.0, 300.0, 390.0, 400.0, 500.0, 600.0, 700.0, 800.0];
        let intervals = intervals_from_timestamps(&ts);

        assert_eq!(intervals.len(), 9);
        assert_eq!(intervals[3], 90.0);
        assert_eq!(intervals[4], 10.0);
        assert_eq!(intervals.iter().filter(|&&v| v == 100.0).count(), 7);
    }

    #[test]
    fn test_intervals_short_input() {
        assert!(intervals_from_timestamps(&[]).is_empty());
        assert!(intervals_from_timestamps(&[5.0]).is_empty());
    }
}
