//! Report output: one line per evaluated day, in engine order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::domain::SignalRow;
use crate::signal::WINDOW;

/// How report lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Date: 2024-01-31, Close: 101.00, SMA(20): 100.05, Signal: BUY`
    #[default]
    Text,
    /// One JSON object per line with unrounded values.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render a row as a text report line (no trailing newline).
pub fn format_text(row: &SignalRow) -> String {
    format!(
        "Date: {}, Close: {:.2}, SMA({WINDOW}): {:.2}, Signal: {}",
        row.date.format("%Y-%m-%d"),
        row.close,
        row.sma,
        row.signal.map(|s| s.as_str()).unwrap_or("")
    )
}

/// Writes report lines to any `Write` sink.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    lines: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            lines: 0,
        }
    }

    pub fn write_row(&mut self, row: &SignalRow) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", format_text(row))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, row)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.lines += 1;
        Ok(())
    }

    pub fn write_all(&mut self, rows: &[SignalRow]) -> io::Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        self.out.flush()
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
