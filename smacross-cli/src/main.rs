//! smacross CLI — print SMA(20) crossover signals for a daily price CSV.
//!
//! Report lines go to stdout; row diagnostics and errors go to stderr.
//!
//! ```text
//! smacross                         # reads ./ksa_us_d.csv
//! smacross prices.csv --format json
//! smacross --config run.toml -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

use smacross_core::{OutputFormat, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "smacross",
    about = "Flag days where the close crosses its 20-day simple moving average"
)]
struct Cli {
    /// CSV file to read (Date in column 1, Close in column 5). Defaults to ksa_us_d.csv.
    input: Option<PathBuf>,

    /// TOML file with `input` and/or `format`. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format: text or json.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Only log fatal errors (hides skipped-row warnings).
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also log a run summary.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    fn run_config(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };
        Ok(base
            .with_input(self.input.clone())
            .with_format(self.format))
    }

    /// Resolve the configuration and write the report to `out`.
    fn execute<W: Write>(&self, out: W) -> Result<()> {
        let config = self.run_config()?;
        smacross_core::run(&config, out)
            .with_context(|| format!("processing {}", config.input.display()))?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .without_time()
        .init();

    cli.execute(std::io::stdout().lock())
}
