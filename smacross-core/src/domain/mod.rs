//! Domain types shared by every stage of the pipeline.

pub mod record;
pub mod signal;

pub use record::Record;
pub use signal::{Crossover, SignalRow};
