//! Simple Moving Average (SMA).
//!
//! Mean of the trailing `period` closes. Lookback: period - 1 (first valid
//! value at index period-1).
//!
//! Every index is summed from scratch, oldest close first, so each value is
//! bit-identical to a plain left-to-right mean of its window.

use crate::domain::Record;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lookback(&self) -> usize {
        self.period - 1
    }

    /// SMA ending at `end` (inclusive), or `None` with too little history.
    pub fn value_at(&self, records: &[Record], end: usize) -> Option<f64> {
        if end < self.lookback() || end >= records.len() {
            return None;
        }
        let window = &records[end + 1 - self.period..=end];
        let sum = window.iter().fold(0.0, |acc, r| acc + r.close);
        Some(sum / self.period as f64)
    }

    /// SMA series aligned with `records`; `NaN` inside the lookback.
    pub fn compute(&self, records: &[Record]) -> Vec<f64> {
        (0..records.len())
            .map(|i| self.value_at(records, i).unwrap_or(f64::NAN))
            .collect()
    }
}
