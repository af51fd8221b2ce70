//! cipherbench command-line driver.
//!
//! Times RSA-OAEP and AES-CBC round trips and writes the results to the
//! console and to a spreadsheet.
//!
//! # Usage
//!
//! ```bash
//! # Default cases: RSA 1024/2048/4096/8192, AES 128/256, 3 runs each
//! cipherbench
//!
//! # Pick cases and output path
//! cipherbench --case rsa:2048 --case aes:256 --output timings.xlsx
//!
//! # More runs, verbose logging
//! cipherbench -r 5 --log-level debug
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cipherbench::{
    export_results, render_console, run_suite, BenchmarkCase, BenchmarkConfig,
    DEFAULT_OUTPUT, DEFAULT_REPETITIONS,
};

/// Benchmark RSA and AES encryption round trips
#[derive(Parser, Debug)]
#[command(name = "cipherbench")]
#[command(about = "Time RSA-OAEP and AES-CBC round trips and export a spreadsheet report")]
#[command(version)]
struct Args {
    /// Spreadsheet to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Timed repetitions per case
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Case to run as <algorithm>:<bits>, e.g. rsa:2048 or aes:256
    ///
    /// May be repeated, but each case only once. Replaces the default case list.
    #[arg(short, long = "case", value_name = "ALG:BITS", value_parser = parse_case)]
    cases: Vec<BenchmarkCase>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_case(s: &str) -> std::result::Result<BenchmarkCase, String> {
    s.parse().map_err(|e: cipherbench::Error| e.to_string())
}

fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let mut config = BenchmarkConfig::default()
        .with_repetitions(args.repetitions)
        .with_output(args.output);
    if !args.cases.is_empty() {
        config = config.with_cases(args.cases);
    }

    println!("Starting benchmarks...");
    let table = run_suite(&config).context("Benchmark run failed")?;

    export_results(&table, config.repetitions, &config.output).with_context(|| {
        format!("Failed to write spreadsheet {}", config.output.display())
    })?;

    println!("\nResults (seconds):");
    print!("{}", render_console(&table));
    println!(
        "\nSpreadsheet '{}' written successfully",
        config.output.display()
    );

    Ok(())
}
