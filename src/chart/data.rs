//! src/chart/data.rs
//!
//! Bounded, order-preserving window of samples (oldest at front).
//!
//! The window does not know its own capacity: every mutation is handed the
//! bar-area width computed from the live geometry, so a resize only takes
//! effect on the next append or replace.

use std::collections::VecDeque;

#[derive(Clone, Debug, Default)]
pub struct DataWindow {
    samples: VecDeque<f64>,
}

impl DataWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, then drop the oldest ones beyond `capacity`.
    ///
    /// Maintains invariant: samples.len() <= capacity.
    pub fn push(&mut self, value: f64, capacity: usize) {
        self.samples.push_back(value);
        self.trim(capacity);
    }

    /// Replace the contents with a copy of `values`, keeping only the newest `capacity`.
    pub fn replace(&mut self, values: &[f64], capacity: usize) {
        self.samples.clear();
        let skip = values.len().saturating_sub(capacity);
        self.samples.extend(values.iter().skip(skip).copied());
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn trim(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// The newest `count` samples, oldest first.
    pub fn latest(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        self.iter().skip(self.len().saturating_sub(count))
    }

    /// Largest sample; the first one wins a tie.
    pub fn max(&self) -> Option<f64> {
        let mut it = self.iter();
        let first = it.next()?;
        Some(it.fold(first, |mx, v| if v > mx { v } else { mx }))
    }
}
