//! Arithmetic-mean interval estimator
//!
//! The naive approach: average every gap in the window. Kept as a baseline
//! to compare against [`IntervalModeEstimator`](super::IntervalModeEstimator);
//! a single long stall inflates it by `stall / (sample_count - 1)`.

use super::unit::TimeUnit;
use super::window::{Push, SampleWindow};
use super::intervals_from_timestamps;
use crate::statistics::IntervalStats;
use crate::traits::{validate_sample_count, ConfigError, RateEstimator};

/// Mean-of-intervals estimator with the same cycle semantics as the mode estimator
///
/// # Example
///
/// ```
/// use jitterstats::rate::MeanIntervalEstimator;
///
/// let mut estimator = MeanIntervalEstimator::new(5).unwrap();
///
/// for t in [0.0, 100.0, 200.0, 500.0, 600.0] {
///     estimator.add_sample(t);
/// }
///
/// // One 300 ms stall pulls the mean to 150 ms
/// assert_eq!(estimator.interval(), 150.0);
/// ```
#[derive(Clone, Debug)]
pub struct MeanIntervalEstimator {
    window: SampleWindow,
    unit: TimeUnit,
    stats: Option<IntervalStats>,
}

impl MeanIntervalEstimator {
    /// Create a millisecond estimator over `sample_count` timestamps
    pub fn new(sample_count: usize) -> Result<Self, ConfigError> {
        validate_sample_count(sample_count)?;
        Ok(Self {
            window: SampleWindow::new(sample_count),
            unit: TimeUnit::Milliseconds,
            stats: None,
        })
    }

    /// Use a different time unit for timestamps
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Start a new cycle over `sample_count` timestamps
    pub fn configure(&mut self, sample_count: usize) -> Result<(), ConfigError> {
        validate_sample_count(sample_count)?;
        self.window.reset(sample_count);
        self.stats = None;
        Ok(())
    }

    /// Record an arrival timestamp
    ///
    /// Returns `true` only on the call that fills the window.
    pub fn add_sample(&mut self, timestamp: f64) -> bool {
        match self.window.push(timestamp) {
            Push::Filled => {
                let intervals = intervals_from_timestamps(self.window.samples());
                self.stats = Some(IntervalStats::from_intervals(&intervals));
                tracing::debug!(
                    target: "jitterstats::rate",
                    interval = self.interval(),
                    "mean estimation cycle complete"
                );
                true
            }
            Push::NonFinite | Push::OutOfOrder { .. } => {
                tracing::warn!(target: "jitterstats::rate", timestamp, "timestamp dropped");
                false
            }
            Push::Pending | Push::Frozen => false,
        }
    }

    /// Mean interval, `0.0` until the cycle completes
    pub fn interval(&self) -> f64 {
        self.stats.as_ref().map_or(0.0, IntervalStats::mean)
    }

    /// Frequency implied by the mean interval, `0.0` until the cycle completes
    pub fn frequency_hz(&self) -> f64 {
        self.unit.frequency_hz(self.interval())
    }

    /// Interval statistics of the completed window
    pub fn stats(&self) -> Option<&IntervalStats> {
        self.stats.as_ref()
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl RateEstimator for MeanIntervalEstimator {
    fn add_sample(&mut self, timestamp: f64) -> bool {
        MeanIntervalEstimator::add_sample(self, timestamp)
    }

    fn reset(&mut self) {
        let capacity = self.window.capacity();
        self.window.reset(capacity);
        self.stats = None;
    }

    fn is_complete(&self) -> bool {
        self.stats.is_some()
    }

    fn len(&self) -> usize {
        self.window.len()
    }

    fn capacity(&self) -> usize {
        self.window.capacity()
    }

    fn interval(&self) -> f64 {
        MeanIntervalEstimator::interval(self)
    }

    fn frequency_hz(&self) -> f64 {
        MeanIntervalEstimator::frequency_hz(self)
    }
}
