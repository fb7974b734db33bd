//! Record — one trading day of the input series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closing price for a single trading day.
///
/// Records keep the row order of the input file. Nothing downstream sorts
/// them, so an unsorted file is evaluated in file order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub close: f64,
}

impl Record {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}
