//! Histogram-mode interval estimator
//!
//! Collects a fixed window of arrival timestamps, bins the gaps between them
//! and reports the most common gap as the sampling period. Scheduling delays
//! spread some gaps out but rarely move the peak of the histogram, so the mode
//! tracks the true period where a mean would drift.

use super::histogram::IntervalHistogram;
use super::unit::TimeUnit;
use super::window::{Push, SampleWindow};
use super::intervals_from_timestamps;
use crate::statistics::IntervalStats;
use crate::traits::{validate_bin_width, validate_sample_count, ConfigError, RateEstimator};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Parameters of one estimation cycle
///
/// # Example
///
/// ```
/// use jitterstats::rate::{ModeEstimatorConfig, TimeUnit};
///
/// let config = ModeEstimatorConfig::new(0.5, 101)
///     .unwrap()
///     .with_unit(TimeUnit::Microseconds);
///
/// assert_eq!(config.sample_count(), 101);
/// assert!(ModeEstimatorConfig::new(0.0, 10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeEstimatorConfig {
    /// Histogram bin width, in `unit`
    bin_width: f64,
    /// Timestamps per cycle
    sample_count: usize,
    /// Unit of timestamps and bin width
    unit: TimeUnit,
}

impl Default for ModeEstimatorConfig {
    /// 10 ms bins over 51 timestamps
    fn default() -> Self {
        Self {
            bin_width: Self::DEFAULT_BIN_WIDTH,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            unit: TimeUnit::Milliseconds,
        }
    }
}

impl ModeEstimatorConfig {
    /// Default bin width in milliseconds, enough to resolve rates to ~0.1 Hz
    pub const DEFAULT_BIN_WIDTH: f64 = 10.0;

    /// Default number of timestamps per cycle
    pub const DEFAULT_SAMPLE_COUNT: usize = 51;

    /// Create a millisecond configuration
    ///
    /// # Arguments
    ///
    /// * `bin_width` - Width of each histogram bin; narrower bins resolve the
    ///   period more finely but need more samples to form a clear peak
    /// * `sample_count` - Timestamps per cycle, at least 2; larger windows
    ///   tolerate more jitter
    pub fn new(bin_width: f64, sample_count: usize) -> Result<Self, ConfigError> {
        let config = Self {
            bin_width,
            sample_count,
            unit: TimeUnit::Milliseconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Use a different time unit for timestamps and bin width
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Check both parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sample_count(self.sample_count)?;
        validate_bin_width(self.bin_width)
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ModeEstimatorConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ModeEstimatorConfig", 3)?;
        state.serialize_field("bin_width", &self.bin_width)?;
        state.serialize_field("sample_count", &self.sample_count)?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ModeEstimatorConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct ConfigData {
            bin_width: f64,
            sample_count: usize,
            #[serde(default)]
            unit: TimeUnit,
        }

        let data = ConfigData::deserialize(deserializer)?;
        ModeEstimatorConfig::new(data.bin_width, data.sample_count)
            .map(|config| config.with_unit(data.unit))
            .map_err(serde::de::Error::custom)
    }
}

/// How an estimate was derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EstimateMethod {
    /// Start of the most populated histogram bin
    Mode,
    /// Arithmetic mean of the intervals
    Average,
}

/// Result of a completed estimation cycle
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    /// Estimated sampling period, in `unit`
    pub interval: f64,
    /// Estimated sampling frequency in Hz
    pub frequency_hz: f64,
    /// Mode, or the averaging fallback
    pub method: EstimateMethod,
    /// Unit of `interval`
    pub unit: TimeUnit,
    /// Summary of the intervals the estimate was drawn from
    pub stats: IntervalStats,
}

impl Estimate {
    fn new(interval: f64, method: EstimateMethod, unit: TimeUnit, stats: IntervalStats) -> Self {
        Self {
            interval,
            frequency_hz: unit.frequency_hz(interval),
            method,
            unit,
            stats,
        }
    }

    /// Arithmetic mean of the intervals, for comparison with [`interval`](Self::interval)
    pub fn mean_interval(&self) -> f64 {
        self.stats.mean()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Estimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Estimate", 5)?;
        state.serialize_field("interval", &self.interval)?;
        state.serialize_field("frequency_hz", &self.frequency_hz)?;
        state.serialize_field("method", &self.method)?;
        state.serialize_field("unit", &self.unit)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}

/// Estimate the sampling period of a complete interval sequence
///
/// Intervals whose spread (`max - min`) is no wider than one bin are averaged;
/// otherwise the start of the most populated bin wins, ties going to the
/// shorter interval. Returns `None` when `intervals` has no finite values or
/// `config` is invalid.
///
/// # Example
///
/// ```
/// use jitterstats::rate::{estimate_from_intervals, EstimateMethod, ModeEstimatorConfig};
///
/// let config = ModeEstimatorConfig::new(1.0, 10).unwrap();
/// let estimate = estimate_from_intervals(&[100.0, 100.0, 270.0, 100.0, 30.0], &config).unwrap();
///
/// assert_eq!(estimate.interval, 100.0);
/// assert_eq!(estimate.method, EstimateMethod::Mode);
/// ```
pub fn estimate_from_intervals(
    intervals: &[f64],
    config: &ModeEstimatorConfig,
) -> Option<Estimate> {
    config.validate().ok()?;

    let stats = IntervalStats::from_intervals(intervals);
    let range = stats.range()?;
    let unit = config.unit();

    if range <= config.bin_width() {
        tracing::debug!(
            target: "jitterstats::rate",
            range,
            bin_width = config.bin_width(),
            "interval spread within one bin, averaging"
        );
        return Some(Estimate::new(stats.mean(), EstimateMethod::Average, unit, stats));
    }

    let mode = IntervalHistogram::build(intervals, config.bin_width())
        .and_then(|hist| hist.mode_bin().map(|bin| (bin, hist.bin_start(bin), hist.count(bin))));

    match mode {
        Some((bin, interval, count)) => {
            tracing::debug!(
                target: "jitterstats::rate",
                bin,
                count,
                interval,
                "mode bin selected"
            );
            Some(Estimate::new(interval, EstimateMethod::Mode, unit, stats))
        }
        // No finite interval to bin
        None => Some(Estimate::new(stats.mean(), EstimateMethod::Average, unit, stats)),
    }
}

/// Jitter-robust sampling period estimator
///
/// Feed it one timestamp per observed event. After `sample_count` timestamps
/// it computes the `sample_count - 1` gaps, bins them `bin_width` apart
/// starting at the smallest gap, and reports the start of the fullest bin.
/// If every gap lies within one bin width of the others, it reports their
/// mean instead.
///
/// Each cycle produces exactly one estimate. Samples after the window is
/// full are ignored until [`configure`](Self::configure) or
/// [`reset`](RateEstimator::reset) starts a new cycle.
///
/// Timestamps must be non-decreasing; NaN, infinite, and out-of-order
/// timestamps are dropped without being recorded.
///
/// # Example
///
/// ```
/// use jitterstats::rate::IntervalModeEstimator;
///
/// let mut estimator = IntervalModeEstimator::new(1.0, 10).unwrap();
///
/// let arrivals = [0.0, 100.0, 200.0, 300.0, 390.0, 400.0, 500.0, 600.0, 700.0, 800.0];
/// let completed: Vec<bool> = arrivals.iter().map(|&t| estimator.add_sample(t)).collect();
///
/// assert_eq!(completed.iter().filter(|&&c| c).count(), 1);
/// assert!(completed[9]);
/// assert!((estimator.interval() - 100.0).abs() < 1e-9);
/// assert!((estimator.frequency_hz() - 10.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct IntervalModeEstimator {
    config: ModeEstimatorConfig,
    window: SampleWindow,
    result: Option<Estimate>,
}

impl Default for IntervalModeEstimator {
    fn default() -> Self {
        Self::with_config(ModeEstimatorConfig::default())
    }
}

impl IntervalModeEstimator {
    /// Create a millisecond estimator
    ///
    /// # Arguments
    ///
    /// * `bin_width` - Histogram bin width in milliseconds, must be > 0
    /// * `sample_count` - Timestamps per cycle, must be >= 2
    pub fn new(bin_width: f64, sample_count: usize) -> Result<Self, ConfigError> {
        ModeEstimatorConfig::new(bin_width, sample_count).map(Self::with_config)
    }

    /// Create an estimator from a validated configuration
    pub fn with_config(config: ModeEstimatorConfig) -> Self {
        Self {
            window: SampleWindow::new(config.sample_count()),
            config,
            result: None,
        }
    }

    /// Start a new cycle with new parameters
    ///
    /// Clears recorded timestamps and the previous estimate. The time unit is
    /// kept. On error the estimator is left unchanged.
    pub fn configure(&mut self, bin_width: f64, sample_count: usize) -> Result<(), ConfigError> {
        let config = ModeEstimatorConfig::new(bin_width, sample_count)?.with_unit(self.config.unit());
        self.apply(config);
        Ok(())
    }

    /// Start a new cycle with a full configuration, including the unit
    pub fn configure_with(&mut self, config: ModeEstimatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.apply(config);
        Ok(())
    }

    fn apply(&mut self, config: ModeEstimatorConfig) {
        self.config = config;
        self.window.reset(config.sample_count());
        self.result = None;
    }

    /// Record an arrival timestamp
    ///
    /// Returns `true` exactly once per cycle: on the call that records the
    /// `sample_count`-th timestamp, after the estimate has been computed.
    /// Every other call, including all calls after completion, returns `false`.
    pub fn add_sample(&mut self, timestamp: f64) -> bool {
        match self.window.push(timestamp) {
            Push::Pending => {
                tracing::trace!(
                    target: "jitterstats::rate",
                    timestamp,
                    recorded = self.window.len(),
                    needed = self.window.capacity(),
                    "sample recorded"
                );
                false
            }
            Push::Filled => {
                self.result = self.compute();
                if let Some(estimate) = &self.result {
                    tracing::debug!(
                        target: "jitterstats::rate",
                        interval = estimate.interval,
                        frequency_hz = estimate.frequency_hz,
                        method = ?estimate.method,
                        "estimation cycle complete"
                    );
                }
                true
            }
            Push::Frozen => false,
            Push::NonFinite => {
                tracing::warn!(target: "jitterstats::rate", timestamp, "non-finite timestamp dropped");
                false
            }
            Push::OutOfOrder { previous } => {
                tracing::warn!(
                    target: "jitterstats::rate",
                    timestamp,
                    previous,
                    "out-of-order timestamp dropped"
                );
                false
            }
        }
    }

    fn compute(&self) -> Option<Estimate> {
        let intervals = intervals_from_timestamps(self.window.samples());
        estimate_from_intervals(&intervals, &self.config)
    }

    /// Estimated period in the configured unit, `0.0` until the cycle completes
    pub fn interval(&self) -> f64 {
        self.result.as_ref().map_or(0.0, |e| e.interval)
    }

    /// Estimated sampling frequency in Hz, `0.0` until the cycle completes
    pub fn frequency_hz(&self) -> f64 {
        self.result.as_ref().map_or(0.0, |e| e.frequency_hz)
    }

    /// Full result of the completed cycle
    pub fn estimate(&self) -> Option<&Estimate> {
        self.result.as_ref()
    }

    /// Whether the current cycle has produced an estimate
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn config(&self) -> &ModeEstimatorConfig {
        &self.config
    }

    /// Timestamps recorded so far in this cycle
    pub fn samples(&self) -> &[f64] {
        self.window.samples()
    }

    /// Gaps between recorded timestamps
    ///
    /// Available once the window is full, `None` before.
    pub fn intervals(&self) -> Option<Vec<f64>> {
        if self.window.is_full() {
            Some(intervals_from_timestamps(self.window.samples()))
        } else {
            None
        }
    }

    /// Histogram of the completed window, for inspection
    ///
    /// `None` before completion, or when the window could not be binned.
    pub fn histogram(&self) -> Option<IntervalHistogram> {
        let intervals = self.intervals()?;
        IntervalHistogram::build(&intervals, self.config.bin_width())
    }
}

impl RateEstimator for IntervalModeEstimator {
    fn add_sample(&mut self, timestamp: f64) -> bool {
        IntervalModeEstimator::add_sample(self, timestamp)
    }

    fn reset(&mut self) {
        self.apply(self.config);
    }

    fn is_complete(&self) -> bool {
        IntervalModeEstimator::is_complete(self)
    }

    fn len(&self) -> usize {
        self.window.len()
    }

    fn capacity(&self) -> usize {
        self.window.capacity()
    }

    fn interval(&self) -> f64 {
        IntervalModeEstimator::interval(self)
    }

    fn frequency_hz(&self) -> f64 {
        IntervalModeEstimator::frequency_hz(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(estimator: &mut IntervalModeEstimator, timestamps: &[f64]) -> Vec<bool> {
        timestamps.iter().map(|&t| estimator.add_sample(t)).collect()
    }

    /// Timestamps with the given gaps, starting at zero
    fn from_gaps(gaps: &[f64]) -> Vec<f64> {
        let mut t = 0.0;
        let mut out = vec![t];
        for gap in gaps {
            t += gap;
            out.push(t);
        }
        out
    }

    #[test]
    fn test_concrete_scenario() {
        let mut est = IntervalModeEstimator::new(1.0, 10).unwrap();
        let ts = [0.0, 100.0, 200.0, 300.0, 390.0, 400.0, 500.0, 600.0, 700.0, 800.0];

        let flags = run(&mut est, &ts);

        assert_eq!(flags[..9], [false; 9]);
        assert!(flags[9]);
        assert!((est.interval() - 100.0).abs() < 1e-9);
        assert!((est.frequency_hz() - 10.0).abs() < 1e-9);
        assert_eq!(est.estimate().unwrap().method, EstimateMethod::Mode);
    }

    #[test]
    fn test_completion_flag_sequence() {
        for n in [2usize, 3, 7, 51] {
            let mut est = IntervalModeEstimator::new(1.0, n).unwrap();
            let ts: Vec<f64> = (0..n + 5).map(|i| i as f64 * 20.0).collect();

            let flags = run(&mut est, &ts);

            for (i, &flag) in flags.iter().enumerate() {
                assert_eq!(flag, i == n - 1, "n={} call={}", n, i);
            }
            assert_eq!(est.samples().len(), n);
        }
    }

    #[test]
    fn test_rejects_outliers() {
        let mut gaps = vec![100.0; 30];
        gaps[3] = 101.0;
        gaps[8] = 98.0;
        gaps[9] = 102.0;
        gaps[10] = 70.0;
        gaps[11] = 130.0;
        gaps[15] = 99.0;
        gaps[20] = 300.0;
        gaps[21] = 5.0;
        let ts = from_gaps(&gaps);

        let mut est = IntervalModeEstimator::new(5.0, ts.len()).unwrap();
        run(&mut est, &ts);

        let estimate = est.estimate().unwrap();
        assert_eq!(estimate.method, EstimateMethod::Mode);
        assert_eq!(estimate.interval, 100.0);
        assert_eq!(estimate.frequency_hz, 10.0);
        // The mean is dragged well off the true period
        assert!((estimate.mean_interval() - 100.0).abs() > 1.0);
    }

    #[test]
    fn test_degenerate_spread_averages() {
        let ts = from_gaps(&[100.0, 100.5, 99.5, 100.25]);
        let mut est = IntervalModeEstimator::new(1.0, ts.len()).unwrap();

        assert!(run(&mut est, &ts)[4]);

        let estimate = est.estimate().unwrap();
        assert_eq!(estimate.method, EstimateMethod::Average);
        let mean = (100.0 + 100.5 + 99.5 + 100.25) / 4.0;
        assert_eq!(estimate.interval, mean);
        assert!((est.frequency_hz() - 1000.0 / mean).abs() < 1e-12);
    }

    #[test]
    fn test_spread_equal_to_bin_width_averages() {
        let ts = from_gaps(&[10.0, 11.0, 10.0]);
        let mut est = IntervalModeEstimator::new(1.0, ts.len()).unwrap();
        run(&mut est, &ts);

        assert_eq!(est.estimate().unwrap().method, EstimateMethod::Average);
    }

    #[test]
    fn test_tie_breaks_toward_lower_interval() {
        let ts = from_gaps(&[80.0, 50.0, 80.0, 50.0, 80.0, 50.0]);
        let mut est = IntervalModeEstimator::new(5.0, ts.len()).unwrap();
        run(&mut est, &ts);

        assert_eq!(est.interval(), 50.0);
        assert_eq!(est.frequency_hz(), 20.0);
    }

    #[test]
    fn test_frequency_matches_interval() {
        let ts = from_gaps(&[33.0, 33.0, 34.0, 33.0, 60.0, 33.0]);
        let mut est = IntervalModeEstimator::new(0.5, ts.len()).unwrap();
        run(&mut est, &ts);

        assert!((est.frequency_hz() - 1000.0 / est.interval()).abs() < 1e-12);
    }

    #[test]
    fn test_unit_changes_frequency_scale() {
        let config = ModeEstimatorConfig::new(1.0, 6)
            .unwrap()
            .with_unit(TimeUnit::Microseconds);
        let mut est = IntervalModeEstimator::with_config(config);
        run(&mut est, &from_gaps(&[100.0, 100.0, 100.0, 180.0, 100.0]));

        assert_eq!(est.interval(), 100.0);
        assert!((est.frequency_hz() - 10_000.0).abs() < 1e-9);
        assert_eq!(est.estimate().unwrap().unit, TimeUnit::Microseconds);
    }

    #[test]
    fn test_wide_spread_still_uses_mode() {
        // 1 us bins with a 2 s stall: two million bins wide
        let mut gaps = vec![100_000.0; 50];
        gaps[25] = 2_000_000.0;
        let config = ModeEstimatorConfig::new(1.0, 51)
            .unwrap()
            .with_unit(TimeUnit::Microseconds);
        let mut est = IntervalModeEstimator::with_config(config);
        run(&mut est, &from_gaps(&gaps));

        let estimate = est.estimate().unwrap();
        assert_eq!(estimate.method, EstimateMethod::Mode);
        assert_eq!(estimate.interval, 100_000.0);
        assert_eq!(estimate.frequency_hz, 10.0);
    }

    #[test]
    fn test_sentinel_before_completion() {
        let mut est = IntervalModeEstimator::new(1.0, 4).unwrap();
        est.add_sample(0.0);
        est.add_sample(10.0);

        assert_eq!(est.interval(), 0.0);
        assert_eq!(est.frequency_hz(), 0.0);
        assert!(est.estimate().is_none());
        assert!(est.intervals().is_none());
        assert!(est.histogram().is_none());
    }

    #[test]
    fn test_reconfigure_resets() {
        let mut est = IntervalModeEstimator::new(1.0, 3).unwrap();
        run(&mut est, &[0.0, 10.0, 20.0]);
        assert!(est.is_complete());

        est.configure(2.0, 4).unwrap();

        assert!(!est.is_complete());
        assert_eq!(est.interval(), 0.0);
        assert!(est.samples().is_empty());
        assert_eq!(est.config().bin_width(), 2.0);

        let flags = run(&mut est, &[0.0, 5.0, 10.0, 15.0]);
        assert_eq!(flags, vec![false, false, false, true]);
        assert_eq!(est.interval(), 5.0);
    }

    #[test]
    fn test_configure_rejects_invalid() {
        let mut est = IntervalModeEstimator::new(1.0, 3).unwrap();
        run(&mut est, &[0.0, 10.0]);

        assert_eq!(
            est.configure(1.0, 1),
            Err(ConfigError::TooFewSamples {
                requested: 1,
                minimum: 2
            })
        );
        assert_eq!(est.configure(0.0, 5), Err(ConfigError::InvalidBinWidth(0.0)));
        assert!(est.configure(-3.0, 5).is_err());

        // Failed configure leaves the cycle untouched
        assert_eq!(est.samples(), &[0.0, 10.0]);
        assert!(est.add_sample(20.0));
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(IntervalModeEstimator::new(1.0, 0).is_err());
        assert!(IntervalModeEstimator::new(1.0, 1).is_err());
        assert!(IntervalModeEstimator::new(f64::NAN, 10).is_err());
        assert!(IntervalModeEstimator::new(1.0, 2).is_ok());
    }

    #[test]
    fn test_default_config() {
        let est = IntervalModeEstimator::default();

        assert_eq!(est.config().bin_width(), 10.0);
        assert_eq!(est.config().sample_count(), 51);
        assert_eq!(est.config().unit(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_bad_timestamps_dropped() {
        let mut est = IntervalModeEstimator::new(1.0, 3).unwrap();

        assert!(!est.add_sample(100.0));
        assert!(!est.add_sample(f64::NAN));
        assert!(!est.add_sample(50.0));
        assert!(!est.add_sample(200.0));
        assert_eq!(est.samples(), &[100.0, 200.0]);
        assert!(est.add_sample(300.0));
    }

    #[test]
    fn test_two_sample_window() {
        let mut est = IntervalModeEstimator::new(1.0, 2).unwrap();

        assert!(!est.add_sample(5.0));
        assert!(est.add_sample(45.0));

        // One interval: zero spread, averaged
        assert_eq!(est.interval(), 40.0);
        assert_eq!(est.estimate().unwrap().method, EstimateMethod::Average);
    }

    #[test]
    fn test_equal_timestamps() {
        let mut est = IntervalModeEstimator::new(1.0, 3).unwrap();
        run(&mut est, &[7.0, 7.0, 7.0]);

        assert!(est.is_complete());
        assert_eq!(est.interval(), 0.0);
        assert_eq!(est.frequency_hz(), 0.0);
    }

    #[test]
    fn test_histogram_accessor() {
        let mut est = IntervalModeEstimator::new(1.0, 10).unwrap();
        run(
            &mut est,
            &[0.0, 100.0, 200.0, 300.0, 390.0, 400.0, 500.0, 600.0, 700.0, 800.0],
        );

        let hist = est.histogram().unwrap();
        assert_eq!(hist.origin(), 10.0);
        assert_eq!(hist.mode_interval(), Some(est.interval()));
        assert_eq!(est.intervals().unwrap().len(), 9);
    }

    #[test]
    fn test_instances_independent() {
        let mut a = IntervalModeEstimator::new(1.0, 3).unwrap();
        let mut b = IntervalModeEstimator::new(1.0, 3).unwrap();

        run(&mut a, &[0.0, 10.0, 20.0]);
        b.add_sample(0.0);

        assert!(a.is_complete());
        assert!(!b.is_complete());
        assert_eq!(b.samples(), &[0.0]);
    }

    #[test]
    fn test_trait_reset() {
        let mut est = IntervalModeEstimator::new(1.0, 3).unwrap();
        run(&mut est, &[0.0, 10.0, 20.0]);

        RateEstimator::reset(&mut est);

        assert!(RateEstimator::is_empty(&est));
        assert_eq!(RateEstimator::remaining(&est), 3);
        assert_eq!(RateEstimator::interval(&est), 0.0);
    }

    #[test]
    fn test_estimate_from_intervals_empty() {
        let config = ModeEstimatorConfig::default();
        assert!(estimate_from_intervals(&[], &config).is_none());
    }
}
