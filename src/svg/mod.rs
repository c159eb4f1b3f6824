//! SVG layout analysis engine.
//!
//! Three pure stages run in sequence over one document:
//! [`tree::parse`] builds an element tree, [`extract::extract`] reads the
//! canvas size and the root's `<rect>` children, and the functions in
//! [`mod@analyze`] derive a coverage ratio and issues. Nothing is shared
//! between runs, so separate documents can be analyzed on separate threads.

pub mod analyze;
pub mod extract;
pub mod tree;
pub mod types;

pub use tree::{Element, ParseError};
pub use types::{AnalysisResult, CanvasMetadata, Issue, IssueKind, Rectangle};

/// Analyze one document's markup text.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not well-formed markup. Missing or
/// unreadable attributes are never errors; they take default values.
#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn analyze(text: &str) -> Result<AnalysisResult, ParseError> {
    let root = tree::parse(text)?;
    let extract::Extraction { metadata, rectangles } = extract::extract(&root);
    tracing::debug!(
        width = metadata.width,
        height = metadata.height,
        rectangles = rectangles.len(),
        "extracted canvas"
    );

    let coverage_ratio = analyze::coverage_ratio(&rectangles, metadata.width, metadata.height);
    let issues = analyze::detect_issues(&rectangles, metadata.width, metadata.height);
    tracing::debug!(coverage_ratio, issues = issues.len(), "analysis complete");

    Ok(AnalysisResult { metadata, rectangles, coverage_ratio, issues })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
