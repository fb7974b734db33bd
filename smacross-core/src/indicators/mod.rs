//! Indicator series computed over the record sequence.

pub mod sma;

pub use sma::Sma;

/// Build records with consecutive dates from close prices, for tests.
#[cfg(test)]
pub fn make_records(closes: &[f64]) -> Vec<crate::domain::Record> {
    use crate::domain::Record;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Record::new(base_date + chrono::Duration::days(i as i64), close))
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
