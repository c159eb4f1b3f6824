//! Design report records: one per analyzed document.
//!
//! DESIGN
//! ======
//! A report starts `PENDING` when a document is admitted and is completed
//! exactly once, either `PROCESSED` with the analysis folded in or `FAILED`
//! with the error text. [`DesignSummary`] is the listing view of a report.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::svg::{AnalysisResult, Issue, Rectangle};

// =============================================================================
// STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DesignStatus {
    Pending,
    Processed,
    Failed,
}

// =============================================================================
// REPORT
// =============================================================================

/// Canvas size as reported to callers. `None` until the document is processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub svg_width: Option<f64>,
    pub svg_height: Option<f64>,
}

/// Detail view of one analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReport {
    pub id: Uuid,
    pub filename: String,
    pub status: DesignStatus,
    /// Milliseconds since the Unix epoch when the document was admitted.
    pub created_at: i64,
    pub metadata: ReportMetadata,
    pub items: Vec<Rectangle>,
    pub items_count: usize,
    pub coverage_ratio: f64,
    pub issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DesignReport {
    /// Fresh report for an admitted document that has not been analyzed yet.
    #[must_use]
    pub fn pending(filename: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            status: DesignStatus::Pending,
            created_at: now_ms(),
            metadata: ReportMetadata::default(),
            items: Vec::new(),
            items_count: 0,
            coverage_ratio: 0.0,
            issues: Vec::new(),
            error: None,
        }
    }

    /// Complete the report with an analysis result.
    #[must_use]
    pub fn processed(self, result: AnalysisResult) -> Self {
        let AnalysisResult { metadata, rectangles, coverage_ratio, issues } = result;
        Self {
            status: DesignStatus::Processed,
            metadata: ReportMetadata { svg_width: Some(metadata.width), svg_height: Some(metadata.height) },
            items_count: rectangles.len(),
            items: rectangles,
            coverage_ratio,
            issues,
            error: None,
            ..self
        }
    }

    /// Complete the report as failed. Analysis fields keep their pending values.
    #[must_use]
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self { status: DesignStatus::Failed, error: Some(message.into()), ..self }
    }

    #[must_use]
    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            id: self.id,
            filename: self.filename.clone(),
            status: self.status,
            items_count: self.items_count,
            created_at: self.created_at,
            issues: self.issues.clone(),
        }
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Listing view of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSummary {
    pub id: Uuid,
    pub filename: String,
    pub status: DesignStatus,
    pub items_count: usize,
    pub created_at: i64,
    pub issues: Vec<Issue>,
}

fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
