//! Data model for one analysis run: canvas, rectangles, issues, result.

use serde::{Deserialize, Serialize};

/// Fill used when a rectangle carries no `fill` attribute.
pub const DEFAULT_FILL: &str = "#000000";

pub const EMPTY_MESSAGE: &str = "No rectangle elements were found in the SVG.";
pub const OUT_OF_BOUNDS_MESSAGE: &str =
    "Rectangle extends beyond SVG boundaries (x + width or y + height exceeds canvas).";

/// Drawable area of the analyzed document. Zero on an axis means undetermined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasMetadata {
    pub width: f64,
    pub height: f64,
}

/// One extracted `<rect>` primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

impl Rectangle {
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the far edge passes the canvas on either axis.
    ///
    /// Only `x + width` and `y + height` are compared; a negative origin on
    /// its own is not flagged. Touching the edge exactly is in bounds.
    #[must_use]
    pub fn exceeds(&self, canvas_width: f64, canvas_height: f64) -> bool {
        self.x + self.width > canvas_width || self.y + self.height > canvas_height
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0, fill: DEFAULT_FILL.to_owned() }
    }
}

/// Kind of structural problem found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// The document has no rectangle elements.
    Empty,
    /// A rectangle's far edge lies past the canvas.
    OutOfBounds,
}

/// A detected problem. `rectangle_id` is the zero-based extraction index of
/// the offending rectangle, or `None` for document-level issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub rectangle_id: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn empty() -> Self {
        Self { kind: IssueKind::Empty, message: EMPTY_MESSAGE.to_owned(), rectangle_id: None }
    }

    #[must_use]
    pub fn out_of_bounds(index: usize) -> Self {
        Self {
            kind: IssueKind::OutOfBounds,
            message: OUT_OF_BOUNDS_MESSAGE.to_owned(),
            rectangle_id: Some(index.to_string()),
        }
    }
}

/// Complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub metadata: CanvasMetadata,
    pub rectangles: Vec<Rectangle>,
    pub coverage_ratio: f64,
    pub issues: Vec<Issue>,
}
