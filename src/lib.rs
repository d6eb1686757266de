pub mod clean;
pub mod cli;
pub mod data;
pub mod dataset;
pub mod error;
pub mod io_utils;
pub mod queries;
pub mod report;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::Cli;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("movie_reports", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

/// Loads the dataset, cleans it, runs all seven queries, and writes
/// `q1.csv` .. `q7.csv` into the output directory, in that fixed order.
pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let delimiter = io_utils::resolve_input_delimiter(&cli.input, cli.delimiter);
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    info!(
        "Reading '{}' with delimiter '{}'",
        cli.input.display(),
        io_utils::printable_delimiter(delimiter)
    );

    let raw = dataset::Dataset::load(&cli.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", cli.input))?;
    let cleaned = clean::clean(raw, Local::now().date_naive());

    report::ensure_output_dir(&cli.out_dir)
        .with_context(|| format!("Preparing output directory {:?}", cli.out_dir))?;
    for (name, table) in queries::run_all(&cleaned) {
        let path = cli.out_dir.join(format!("{name}.csv"));
        report::write_report(&table, &path)
            .with_context(|| format!("Writing report {name}"))?;
    }

    info!("Done. Exported q1.csv .. q7.csv to {:?}", cli.out_dir);
    Ok(())
}
