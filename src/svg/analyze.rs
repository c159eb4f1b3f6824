//! Coverage ratio and issue detection over extracted rectangles.

use super::types::{Issue, Rectangle};

/// Total rectangle area divided by canvas area.
///
/// Returns `0.0` when either canvas dimension is zero or negative. The ratio
/// is not capped at 1: overlapping or overflowing rectangles push it higher.
/// A negative sum (from negative sizes) is floored at `0.0`.
#[must_use]
pub fn coverage_ratio(rectangles: &[Rectangle], canvas_width: f64, canvas_height: f64) -> f64 {
    if canvas_width <= 0.0 || canvas_height <= 0.0 {
        return 0.0;
    }

    let covered: f64 = rectangles.iter().map(Rectangle::area).sum();
    (covered / (canvas_width * canvas_height)).max(0.0)
}

/// Issues for a document, in a fixed precedence.
///
/// No rectangles yields a single `EMPTY` issue and bounds are not checked.
/// Otherwise every rectangle whose far edge passes the canvas yields one
/// `OUT_OF_BOUNDS` issue carrying its extraction index, in extraction order.
#[must_use]
pub fn detect_issues(rectangles: &[Rectangle], canvas_width: f64, canvas_height: f64) -> Vec<Issue> {
    if rectangles.is_empty() {
        return vec![Issue::empty()];
    }

    rectangles
        .iter()
        .enumerate()
        .filter(|(_, rect)| rect.exceeds(canvas_width, canvas_height))
        .map(|(index, _)| Issue::out_of_bounds(index))
        .collect()
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
