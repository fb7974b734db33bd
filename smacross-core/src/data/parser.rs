//! Row validation: raw CSV rows into `Record`s plus per-row diagnostics.
//!
//! The first row is always the header and is dropped unread. Every other row
//! either becomes a `Record` or a `RowDiagnostic`; nothing here is fatal.

use chrono::NaiveDate;
use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

use super::loader::RawRow;
use crate::domain::Record;

/// Fewest fields a data row may have.
pub const MIN_FIELDS: usize = 5;
/// Column holding the `YYYY-MM-DD` date.
pub const DATE_FIELD: usize = 0;
/// Column holding the closing price.
pub const CLOSE_FIELD: usize = 4;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a data row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected at least 5 fields, found {found}: {fields:?}")]
    TooFewFields { found: usize, fields: Vec<String> },

    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    DateShape { value: String },

    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid close price {value:?}: {source}")]
    Close {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// A rejected row and its 1-based position in the file (header is row 1).
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    pub row: usize,
    pub error: RowError,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}

/// Output of [`parse_rows`].
#[derive(Debug, Clone, Default)]
pub struct ParsedRows {
    pub records: Vec<Record>,
    pub diagnostics: Vec<RowDiagnostic>,
}

/// Validate every data row, keeping input order.
pub fn parse_rows(rows: &[RawRow]) -> ParsedRows {
    let mut parsed = ParsedRows::default();

    for (i, row) in rows.iter().enumerate().skip(1) {
        match parse_row(row) {
            Ok(record) => parsed.records.push(record),
            Err(error) => parsed.diagnostics.push(RowDiagnostic { row: i + 1, error }),
        }
    }

    parsed
}

/// Validate a single data row.
pub fn parse_row(row: &[String]) -> Result<Record, RowError> {
    if row.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields {
            found: row.len(),
            fields: row.to_vec(),
        });
    }

    let date = parse_date(&row[DATE_FIELD])?;
    let raw_close = &row[CLOSE_FIELD];
    let close = raw_close.parse::<f64>().map_err(|source| RowError::Close {
        value: raw_close.clone(),
        source,
    })?;

    Ok(Record::new(date, close))
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts single-digit months and days, so the shape is checked
/// first: ten bytes, hyphens at 4 and 7, digits everywhere else.
pub fn parse_date(value: &str) -> Result<NaiveDate, RowError> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(RowError::DateShape {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| RowError::Date {
        value: value.to_string(),
        source,
    })
}
