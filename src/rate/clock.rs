//! Monotonic timestamp source

use std::time::Instant;

use super::unit::TimeUnit;
use crate::traits::RateEstimator;

/// Reads elapsed time from [`Instant`] as `f64` timestamps
///
/// Timestamps are measured from the clock's creation and are non-decreasing,
/// which is what the estimators expect.
///
/// # Example
///
/// ```
/// use jitterstats::rate::{IntervalModeEstimator, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let mut estimator = IntervalModeEstimator::new(1.0, 3).unwrap();
///
/// // Call once per observed event, e.g. per received packet
/// clock.record(&mut estimator);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
    unit: TimeUnit,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Millisecond clock starting now
    pub fn new() -> Self {
        Self::with_unit(TimeUnit::Milliseconds)
    }

    /// Clock starting now, reporting in `unit`
    pub fn with_unit(unit: TimeUnit) -> Self {
        Self {
            origin: Instant::now(),
            unit,
        }
    }

    /// Time since the clock was created
    pub fn now(&self) -> f64 {
        self.unit.from_duration(self.origin.elapsed())
    }

    /// Timestamp of an instant captured elsewhere, e.g. by a receive loop
    ///
    /// Instants before the clock's origin map to `0.0`.
    pub fn timestamp(&self, instant: Instant) -> f64 {
        self.unit
            .from_duration(instant.saturating_duration_since(self.origin))
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Feed the current time to an estimator
    ///
    /// Returns the estimator's completion flag.
    pub fn record<E: RateEstimator>(&self, estimator: &mut E) -> bool {
        estimator.add_sample(self.now())
    }
}
