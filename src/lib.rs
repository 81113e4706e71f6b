//! # Jitterstats
//!
//! Jitter-robust sampling rate estimation for streams of arrival timestamps.
//!
//! When samples arrive through a non-realtime path (a socket, a USB poll loop,
//! a scheduler tick) the observed gaps between them are a mix of the true
//! sampling period and random delays. A handful of late or bunched-up arrivals
//! is enough to drag an arithmetic mean far away from the real period. The
//! estimators in this crate instead bin the inter-arrival intervals into a
//! histogram and report the most common bin.
//!
//! ## Features
//!
//! - **Mode Estimation**: [`IntervalModeEstimator`] picks the most frequent
//!   interval bin from a fixed window of timestamps
//! - **Average Baseline**: [`MeanIntervalEstimator`] reports the plain mean,
//!   useful for comparison
//! - **Histograms**: [`IntervalHistogram`](rate::IntervalHistogram) exposes the
//!   binning step for diagnostics
//! - **Interval Statistics**: [`IntervalStats`] summarizes spread and jitter
//! - **Explicit Units**: [`TimeUnit`] couples timestamps to the reported Hz
//!
//! ## Quick Start
//!
//! ```rust
//! use jitterstats::prelude::*;
//!
//! // 1 ms bins, 10 timestamps per estimation cycle
//! let mut estimator = IntervalModeEstimator::new(1.0, 10).unwrap();
//!
//! let arrivals = [0.0, 100.0, 200.0, 300.0, 390.0, 400.0, 500.0, 600.0, 700.0, 800.0];
//! for t in arrivals {
//!     if estimator.add_sample(t) {
//!         println!("period ~{} ms", estimator.interval());
//!     }
//! }
//!
//! assert!((estimator.interval() - 100.0).abs() < 1e-9);
//! assert!((estimator.frequency_hz() - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `rate` (default): interval mode and mean estimators
//! - `statistics` (default): interval summary statistics
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support, monotonic clock source
//! - `serde`: Enable serialization of configurations and estimates

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub(crate) mod math;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "rate")]
#[cfg_attr(docsrs, doc(cfg(feature = "rate")))]
pub mod rate;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::IntervalStats;

    #[cfg(feature = "rate")]
    pub use crate::rate::{
        Estimate, EstimateMethod, IntervalModeEstimator, MeanIntervalEstimator,
        ModeEstimatorConfig, TimeUnit,
    };

    #[cfg(all(feature = "rate", feature = "std"))]
    pub use crate::rate::MonotonicClock;
}

#[cfg(feature = "statistics")]
pub use statistics::IntervalStats;

#[cfg(feature = "rate")]
pub use rate::{IntervalModeEstimator, MeanIntervalEstimator, TimeUnit};
