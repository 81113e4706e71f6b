//! Fixed-capacity timestamp window shared by the rate estimators

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Outcome of offering a timestamp to a [`SampleWindow`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Push {
    /// Recorded, window still has room
    Pending,
    /// Recorded, and this sample filled the window
    Filled,
    /// Window was already full; sample ignored
    Frozen,
    /// NaN or infinite timestamp
    NonFinite,
    /// Timestamp earlier than the last recorded one
    OutOfOrder { previous: f64 },
}

/// Append-only buffer of non-decreasing timestamps, frozen once full
#[derive(Clone, Debug)]
pub(crate) struct SampleWindow {
    capacity: usize,
    samples: Vec<f64>,
}

impl SampleWindow {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Drop all samples and adopt a new capacity
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.samples.clear();
        self.samples.reserve(capacity);
        self.capacity = capacity;
    }

    pub(crate) fn push(&mut self, timestamp: f64) -> Push {
        if self.is_full() {
            return Push::Frozen;
        }
        if !timestamp.is_finite() {
            return Push::NonFinite;
        }
        if let Some(&previous) = self.samples.last() {
            if timestamp < previous {
                return Push::OutOfOrder { previous };
            }
        }

        self.samples.push(timestamp);
        if self.is_full() {
            Push::Filled
        } else {
            Push::Pending
        }
    }

    pub(crate) fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }
}
