//! Statistical summaries of interval sequences
//!
//! This module provides single-pass summaries of inter-arrival intervals,
//! used to report how much jitter an estimation window contained.
//!
//! # Example
//!
//! ```
//! use jitterstats::statistics::IntervalStats;
//!
//! let stats = IntervalStats::from_intervals(&[100.0, 100.0, 90.0, 110.0]);
//!
//! println!("Mean: {}", stats.mean());
//! println!("Jitter (stddev): {}", stats.stddev());
//! println!("Min: {:?}", stats.min());
//! println!("Max: {:?}", stats.max());
//! ```

mod summary;

pub use summary::IntervalStats;
