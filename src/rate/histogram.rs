//! Fixed-width histogram over inter-arrival intervals
//!
//! Bins are half-open, `[start, start + width)`, so an interval lying exactly
//! on a boundary is counted once, in the upper bin. The first bin starts at
//! the smallest interval; bins continue while their start does not exceed
//! `max + width`, which always leaves the largest interval inside a bin.
//!
//! Bin edges are defined by index arithmetic: a value belongs to bin
//! `floor((value - origin) / width)`, and bin `k` starts at `origin + width * k`.
//!
//! Only occupied bins are stored, so a narrow width over a wide spread costs
//! memory proportional to the number of intervals, not the number of bins.

use crate::math;
use crate::traits::validate_bin_width;

#[cfg(feature = "std")]
use std::collections::BTreeMap;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;

/// A single histogram bin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Bin index counted from the origin
    pub index: usize,
    /// Inclusive lower edge
    pub start: f64,
    /// Exclusive upper edge
    pub end: f64,
    /// Number of intervals in `[start, end)`
    pub count: u32,
}

/// Histogram of intervals with fixed-width bins anchored at the minimum
///
/// # Example
///
/// ```
/// use jitterstats::rate::IntervalHistogram;
///
/// let intervals = [100.0, 100.0, 100.0, 90.0, 10.0, 100.0];
/// let hist = IntervalHistogram::build(&intervals, 1.0).unwrap();
///
/// assert_eq!(hist.origin(), 10.0);
/// assert_eq!(hist.mode_interval(), Some(100.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalHistogram {
    /// Start of bin 0 (the smallest interval)
    origin: f64,
    /// Width of every bin
    bin_width: f64,
    /// Number of bins, occupied or not
    len: usize,
    /// Interval count per occupied bin, keyed by bin index
    counts: BTreeMap<usize, u32>,
}

impl IntervalHistogram {
    /// Bin the finite values of `intervals` into `bin_width`-wide bins
    ///
    /// Returns `None` if there are no finite intervals or the bin width is
    /// not finite and positive.
    pub fn build(intervals: &[f64], bin_width: f64) -> Option<Self> {
        validate_bin_width(bin_width).ok()?;

        let (min, max) = intervals
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let mut counts = BTreeMap::new();
        for &value in intervals.iter().filter(|v| v.is_finite()) {
            *counts.entry(Self::index_of(min, bin_width, value)).or_insert(0u32) += 1;
        }

        // The bin after the one holding `max` still starts at or below `max + width`
        let len = Self::index_of(min, bin_width, max).saturating_add(2);

        Some(Self {
            origin: min,
            bin_width,
            len,
            counts,
        })
    }

    fn index_of(origin: f64, bin_width: f64, value: f64) -> usize {
        math::floor((value - origin) / bin_width) as usize
    }

    /// Start of the first bin
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Width of each bin
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of bins, including empty ones
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of intervals in bin `index`
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Total number of binned intervals
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// Lower edge of bin `index`
    pub fn bin_start(&self, index: usize) -> f64 {
        self.origin + self.bin_width * index as f64
    }

    /// Bin `index`, if it exists
    pub fn bin(&self, index: usize) -> Option<HistogramBin> {
        if index >= self.len {
            return None;
        }
        let start = self.bin_start(index);
        Some(HistogramBin {
            index,
            start,
            end: start + self.bin_width,
            count: self.count(index),
        })
    }

    /// Iterate over the non-empty bins, lowest first
    pub fn occupied_bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts.keys().filter_map(move |&i| self.bin(i))
    }

    /// Index of the most populated bin
    ///
    /// Ties go to the lowest index. `None` only for an empty histogram.
    pub fn mode_bin(&self) -> Option<usize> {
        self.counts
            .iter()
            .fold(None, |best: Option<(usize, u32)>, (&i, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((i, count)),
            })
            .map(|(i, _)| i)
    }

    /// Lower edge of the most populated bin
    pub fn mode_interval(&self) -> Option<f64> {
        self.mode_bin().map(|i| self.bin_start(i))
    }
}
