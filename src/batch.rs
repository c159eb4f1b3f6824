//! Concurrent analysis of many documents.
//!
//! Each document is admitted through [`intake`](crate::intake), analyzed on a
//! blocking worker, and bounded by the configured timeout. A timed-out worker
//! is abandoned rather than cancelled; the engine has no cancellation points.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::config::AuditConfig;
use crate::intake::{self, IntakeError};
use crate::report::DesignReport;
use crate::svg::{self, AnalysisResult, ParseError};

/// Why one document in a batch did not produce an analysis.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("analysis timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    #[error("analysis worker failed: {0}")]
    Worker(String),
}

/// Analyze every path, at most `config.concurrency` at a time.
///
/// Reports come back in input order. A failure in one document becomes a
/// `FAILED` report and never affects the others.
pub async fn analyze_paths(paths: &[PathBuf], config: &AuditConfig) -> Vec<DesignReport> {
    stream::iter(paths)
        .map(|path| analyze_path(path, config))
        .buffered(config.concurrency.max(1))
        .collect()
        .await
}

/// Admit, analyze, and report on a single document.
pub async fn analyze_path(path: &Path, config: &AuditConfig) -> DesignReport {
    let report = DesignReport::pending(intake::display_name(path));
    match run(path, config).await {
        Ok(result) => {
            tracing::info!(
                filename = %report.filename,
                rectangles = result.rectangles.len(),
                issues = result.issues.len(),
                "design processed"
            );
            report.processed(result)
        }
        Err(e) => {
            tracing::warn!(filename = %report.filename, error = %e, "design failed");
            report.failed(e.to_string())
        }
    }
}

async fn run(path: &Path, config: &AuditConfig) -> Result<AnalysisResult, BatchError> {
    let text = intake::read_document(path, config.max_bytes).await?;
    analyze_text(text, config.timeout).await
}

/// Analyze already-loaded text on a blocking worker, giving up after `timeout`.
///
/// # Errors
///
/// Returns [`BatchError::Parse`] for malformed markup, [`BatchError::TimedOut`]
/// when the worker does not finish in time, and [`BatchError::Worker`] if the
/// worker panicked.
pub async fn analyze_text(text: String, timeout: Duration) -> Result<AnalysisResult, BatchError> {
    run_bounded(move || svg::analyze(&text), timeout).await?.map_err(BatchError::from)
}

/// Run `work` on the blocking pool and wait at most `timeout` for it.
///
/// On timeout the worker keeps running detached and its output is dropped.
///
/// # Errors
///
/// Returns [`BatchError::TimedOut`] when `timeout` elapses first and
/// [`BatchError::Worker`] if `work` panicked.
pub async fn run_bounded<T, F>(work: F, timeout: Duration) -> Result<T, BatchError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let worker = tokio::task::spawn_blocking(work);
    match tokio::time::timeout(timeout, worker).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(join_err)) => Err(BatchError::Worker(join_err.to_string())),
        Err(_) => Err(BatchError::TimedOut { timeout }),
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
