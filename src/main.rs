use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use layout_audit::batch;
use layout_audit::config::AuditConfig;
use layout_audit::report::{DesignReport, DesignStatus};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layout-audit", about = "Analyze SVG documents for rectangle coverage and layout issues")]
struct Cli {
    /// Largest accepted document in bytes (overrides AUDIT_MAX_BYTES).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_bytes: Option<u64>,

    /// Per-document analysis timeout in seconds (overrides AUDIT_TIMEOUT_SECS).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Documents analyzed at once (overrides AUDIT_CONCURRENCY).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    concurrency: Option<usize>,

    /// Print listing summaries instead of full reports.
    #[arg(long)]
    summary: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let mut config = match AuditConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    apply_overrides(&mut config, &cli);
    tracing::debug!(?config, files = cli.files.len(), "starting analysis");

    let reports = batch::analyze_paths(&cli.files, &config).await;
    let failed = reports.iter().filter(|r| r.status == DesignStatus::Failed).count();

    match render(&reports, cli.summary, cli.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize reports");
            return ExitCode::FAILURE;
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = reports.len(), "some designs failed");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn apply_overrides(config: &mut AuditConfig, cli: &Cli) {
    if let Some(max_bytes) = cli.max_bytes {
        config.max_bytes = max_bytes;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }
}

/// Filter from `RUST_LOG`-style directives, `info` when absent or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn render(reports: &[DesignReport], summary: bool, pretty: bool) -> serde_json::Result<String> {
    if summary {
        let summaries: Vec<_> = reports.iter().map(DesignReport::summary).collect();
        to_json(&summaries, pretty)
    } else {
        to_json(reports, pretty)
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
