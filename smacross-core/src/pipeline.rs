//! Loader → Parser → Signal Engine → Reporter.

use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::data::{load_rows, parse_rows, LoadError};
use crate::domain::{Crossover, SignalRow};
use crate::report::Reporter;
use crate::signal;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows read from the file, header included.
    pub rows_read: usize,
    pub records: usize,
    pub skipped: usize,
    pub emitted: usize,
    pub buys: usize,
    pub sells: usize,
}

impl RunSummary {
    fn tally(&mut self, rows: &[SignalRow]) {
        self.emitted = rows.len();
        self.buys = count(rows, Crossover::Buy);
        self.sells = count(rows, Crossover::Sell);
    }
}

fn count(rows: &[SignalRow], kind: Crossover) -> usize {
    rows.iter().filter(|r| r.signal == Some(kind)).count()
}

/// Run the whole pipeline, writing report lines to `out`.
///
/// A load failure returns before anything is written. Row diagnostics are
/// logged at WARN and do not stop the run.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<RunSummary, PipelineError> {
    debug!(input = %config.input.display(), format = %config.format, "loading");
    let rows = load_rows(&config.input)?;

    let parsed = parse_rows(&rows);
    for diag in &parsed.diagnostics {
        warn!(row = diag.row, "skipping row: {}", diag.error);
    }

    let signals = signal::evaluate(&parsed.records);

    let mut reporter = Reporter::new(out, config.format);
    reporter.write_all(&signals)?;

    let mut summary = RunSummary {
        rows_read: rows.len(),
        records: parsed.records.len(),
        skipped: parsed.diagnostics.len(),
        ..RunSummary::default()
    };
    summary.tally(&signals);

    info!(
        rows = summary.rows_read,
        records = summary.records,
        skipped = summary.skipped,
        emitted = summary.emitted,
        buys = summary.buys,
        sells = summary.sells,
        "run complete"
    );
    Ok(summary)
}
