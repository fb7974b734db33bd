//! Price/SMA crossover detection.
//!
//! For every day with a full window of history the engine emits the close, the
//! SMA(20) ending that day and, from the second such day on, a crossover signal
//! comparing today against yesterday:
//!
//! - BUY:  yesterday's close <= yesterday's SMA and today's close >  today's SMA
//! - SELL: yesterday's close >= yesterday's SMA and today's close <  today's SMA
//!
//! The previous day is compared non-strictly and the current day strictly, so a
//! close landing exactly on today's SMA never signals. Both rules need
//! `close > sma` and `close < sma` on the same day, so at most one can fire.

use crate::domain::{Crossover, Record, SignalRow};
use crate::indicators::Sma;

/// SMA window, in trading days.
pub const WINDOW: usize = 20;

/// Evaluate the record sequence with the fixed [`WINDOW`].
pub fn evaluate(records: &[Record]) -> Vec<SignalRow> {
    evaluate_with(&Sma::new(WINDOW), records)
}

pub(crate) fn evaluate_with(sma: &Sma, records: &[Record]) -> Vec<SignalRow> {
    let series = sma.compute(records);
    let first = sma.lookback();

    records
        .iter()
        .enumerate()
        .skip(first)
        .map(|(i, record)| {
            let signal = if i > first {
                classify(records[i - 1].close, series[i - 1], record.close, series[i])
            } else {
                None
            };
            SignalRow {
                index: i,
                date: record.date,
                close: record.close,
                sma: series[i],
                signal,
            }
        })
        .collect()
}

/// Crossover between two consecutive days, if any.
pub fn classify(prev_close: f64, prev_sma: f64, close: f64, sma: f64) -> Option<Crossover> {
    if prev_close <= prev_sma && close > sma {
        Some(Crossover::Buy)
    } else if prev_close >= prev_sma && close < sma {
        Some(Crossover::Sell)
    } else {
        None
    }
}
