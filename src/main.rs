//! analize - classify a directory tree by content type.
//!
//! Usage:
//!   analize <directory-path> [threshold-mb]   Classify, total and flag files
//!   analize <directory-path> --format json    Emit the summary as JSON
//!   analize <directory-path> --magic          Also sniff magic bytes
//!   analize --help                            Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use analize_core::{DEFAULT_THRESHOLD_MB, threshold_mb_to_bytes};
use analize_scan::{
    Classifier, JsonReporter, MagicClassifier, MimeClassifier, ScanConfig, ScanSummary,
    TextReporter, TreeScanner,
};

#[derive(Debug, Parser)]
#[command(
    name = "analize",
    version,
    about = "List, classify and total the files in a directory tree",
    long_about = "analize walks a directory tree, sorts every file into a content \
                  category by its media type, totals sizes per category and flags \
                  files that are large or writable by group/other.",
    override_usage = "analize <directory-path> <threshold-mb>"
)]
struct Cli {
    /// Directory to scan
    #[arg(value_name = "directory-path")]
    directory: PathBuf,

    /// Files larger than this many megabytes are flagged
    #[arg(
        value_name = "threshold-mb",
        default_value_t = DEFAULT_THRESHOLD_MB,
        value_parser = parse_threshold,
        allow_negative_numbers = true
    )]
    threshold_mb: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Read leading bytes to detect executables and archives the extension misses
    #[arg(short, long)]
    magic: bool,

    /// Log every visited entry to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ScanConfig::new(&cli.directory).with_threshold_mb(cli.threshold_mb)?;
    tracing::debug!(?config, "parsed arguments");
    let summary = if cli.magic {
        let classifier = MagicClassifier::new(MimeClassifier::new());
        run_scan(&TreeScanner::with_classifier(classifier), &config, cli.format)?
    } else {
        run_scan(&TreeScanner::new(), &config, cli.format)?
    };

    if summary.has_warnings() {
        eprintln!("{} warning(s) during scan", summary.warnings.len());
    }

    Ok(())
}

/// Run a scan, streaming the report to stdout.
fn run_scan<C: Classifier>(
    scanner: &TreeScanner<C>,
    config: &ScanConfig,
    format: OutputFormat,
) -> Result<ScanSummary> {
    let stdout = std::io::stdout().lock();
    let summary = match format {
        OutputFormat::Text => scanner.run(config, &mut TextReporter::new(stdout)),
        OutputFormat::Json => scanner.run(config, &mut JsonReporter::new(stdout)),
    }
    .wrap_err("Scan failed")?;
    Ok(summary)
}

/// Initialize logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or every
/// visited entry with `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Parse a megabyte threshold, rejecting negative and non-finite values.
fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    threshold_mb_to_bytes(value).map_err(|e| e.to_string())?;
    Ok(value)
}
