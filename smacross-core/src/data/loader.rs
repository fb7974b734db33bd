//! CSV loading.
//!
//! Reads every row of a comma-separated file into memory as plain string
//! fields. The header is kept as row 0; dropping it is the parser's job.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One CSV row as raw string fields.
pub type RawRow = Vec<String>;

/// Fatal errors from the loading stage.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Content that is not valid comma-separated text.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },

    #[error("bare quote in unquoted field at line {line}, column {column}")]
    BareQuote { line: usize, column: usize },

    #[error("unexpected character after closing quote at line {line}, column {column}")]
    TextAfterQuote { line: usize, column: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Open `path` and read all of its rows.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(file, path)
}

/// Read all rows from an arbitrary reader. Errors are attributed to `<reader>`.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    read_rows_from(reader, Path::new("<reader>"))
}

fn read_rows_from<R: Read>(mut reader: R, path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    // The csv reader is lenient about quoting, so strict RFC 4180 quoting is
    // checked up front.
    check_quotes(&content).map_err(|source| LoadError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    // Short rows are reported per row by the parser, so record lengths may vary.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_slice());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|err| classify(err, path))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted { opened_on: usize },
    /// Saw a `"` inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted { opened_on: usize },
}

/// Reject unterminated quotes, quotes inside unquoted fields, and text
/// between a closing quote and the next delimiter.
fn check_quotes(content: &[u8]) -> Result<(), FormatError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut column = 0;

    for &b in content {
        column += 1;
        state = match (state, b) {
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted { opened_on: line },
            (QuoteState::Unquoted, b'"') => return Err(FormatError::BareQuote { line, column }),
            (QuoteState::FieldStart | QuoteState::Unquoted, b',' | b'\r' | b'\n') => {
                QuoteState::FieldStart
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
            (QuoteState::Quoted { opened_on }, b'"') => QuoteState::QuoteInQuoted { opened_on },
            (QuoteState::Quoted { .. }, _) => state,
            (QuoteState::QuoteInQuoted { opened_on }, b'"') => QuoteState::Quoted { opened_on },
            (QuoteState::QuoteInQuoted { .. }, b',' | b'\r' | b'\n') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted { .. }, _) => {
                return Err(FormatError::TextAfterQuote { line, column })
            }
        };
        if b == b'\n' {
            line += 1;
            column = 0;
        }
    }

    match state {
        QuoteState::Quoted { opened_on } => Err(FormatError::UnterminatedQuote { line: opened_on }),
        _ => Ok(()),
    }
}

fn classify(err: csv::Error, path: &Path) -> LoadError {
    let path = path.to_path_buf();
    if err.is_io_error() {
        LoadError::Io {
            path,
            source: io::Error::other(err),
        }
    } else {
        LoadError::Format {
            path,
            source: FormatError::Csv(err),
        }
    }
}
