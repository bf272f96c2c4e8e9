mod report;

use std::io::stderr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Recover timestamped event records from an onboard ATP telemetry log.
///
/// The log format has no reliable record framing, so records are located by
/// probing every byte offset past the 16-byte file header and accepting
/// windows whose embedded timestamp decodes to a plausible calendar date.
/// Expect some noise on heavily corrupted inputs.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input telemetry log file.
    input: PathBuf,

    /// Enable per-window diagnostic tracing on stderr.
    #[arg(short, long, action)]
    verbose: bool,

    /// Maximum number of records to show in the listing.
    #[arg(short = 'n', long, default_value_t = 10, value_name = "count")]
    count: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: report::Format,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("ATPLOG_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let records = atplog::scan_file(&cli.input)
        .with_context(|| format!("scanning {:?}", cli.input))?;

    report::report(&cli.input, &records, cli.count, &cli.format)
}
