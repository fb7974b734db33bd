//! SMA crossover core — loads a daily price CSV, computes the trailing SMA(20)
//! of the close and flags the days where the close crosses it.
//!
//! - `data`: CSV loading and row validation
//! - `domain`: records, crossover signals, emitted rows
//! - `indicators`: simple moving average
//! - `signal`: crossover detection with the fixed 20-day window
//! - `report`: text / JSON-lines rendering
//! - `config`: run configuration (defaults, TOML file)
//! - `pipeline`: the end-to-end run

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod pipeline;
pub mod report;
pub mod signal;

pub use config::{ConfigError, RunConfig, DEFAULT_INPUT};
pub use data::{LoadError, RowDiagnostic, RowError};
pub use domain::{Crossover, Record, SignalRow};
pub use pipeline::{run, PipelineError, RunSummary};
pub use report::{OutputFormat, Reporter};
pub use signal::WINDOW;
