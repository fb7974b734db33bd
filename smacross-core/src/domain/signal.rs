//! Crossover signals and the per-day rows the signal engine emits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a price/SMA crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Crossover {
    /// Close moved from at-or-below the SMA to strictly above it.
    Buy,
    /// Close moved from at-or-above the SMA to strictly below it.
    Sell,
}

impl Crossover {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crossover::Buy => "BUY",
            Crossover::Sell => "SELL",
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated day: close, trailing SMA and the crossover (if any).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    /// 0-based position in the record sequence.
    #[serde(skip)]
    pub index: usize,
    pub date: NaiveDate,
    pub close: f64,
    pub sma: f64,
    pub signal: Option<Crossover>,
}
