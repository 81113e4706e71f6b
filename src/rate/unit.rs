//! Time units for timestamps and intervals

/// Unit in which timestamps, intervals and bin widths are expressed
///
/// The unit only matters when converting an interval to a frequency: an
/// interval of `100.0` is 10 Hz in milliseconds but 10 kHz in microseconds.
/// Estimators default to milliseconds.
///
/// # Example
///
/// ```
/// use jitterstats::rate::TimeUnit;
///
/// assert_eq!(TimeUnit::Milliseconds.frequency_hz(100.0), 10.0);
/// assert_eq!(TimeUnit::Seconds.frequency_hz(0.5), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Seconds,
    #[default]
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Number of units in one second
    pub const fn per_second(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1_000.0,
            TimeUnit::Microseconds => 1_000_000.0,
            TimeUnit::Nanoseconds => 1_000_000_000.0,
        }
    }

    /// Convert an interval in this unit to a frequency in Hz
    ///
    /// Non-positive intervals have no meaningful frequency and map to `0.0`.
    pub fn frequency_hz(self, interval: f64) -> f64 {
        if interval > 0.0 {
            self.per_second() / interval
        } else {
            0.0
        }
    }

    /// Convert a frequency in Hz to an interval in this unit
    pub fn interval_for(self, frequency_hz: f64) -> f64 {
        if frequency_hz > 0.0 {
            self.per_second() / frequency_hz
        } else {
            0.0
        }
    }

    /// Short suffix used when printing values
    pub const fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        }
    }

    /// Express a duration in this unit
    #[cfg(feature = "std")]
    pub fn from_duration(self, duration: std::time::Duration) -> f64 {
        duration.as_secs_f64() * self.per_second()
    }
}

impl core::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.suffix())
    }
}
