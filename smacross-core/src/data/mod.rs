//! Data ingestion: CSV rows off disk, then validated records.
//!
//! Loading is all-or-nothing (a file that cannot be opened or decoded aborts
//! the run). Parsing is row-local: a bad row becomes a diagnostic and the rest
//! of the file is still used.

pub mod loader;
pub mod parser;

pub use loader::{load_rows, read_rows, FormatError, LoadError, RawRow};
pub use parser::{parse_rows, ParsedRows, RowDiagnostic, RowError};
