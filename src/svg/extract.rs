//! Canvas metadata and rectangle extraction from a parsed element tree.
//!
//! Every missing or unreadable attribute falls back to a default instead of
//! failing; see [`parse_dimension`] and [`parse_number`] for the two numeric
//! readings in use.

use super::tree::Element;
use super::types::{CanvasMetadata, DEFAULT_FILL, Rectangle};

pub const ROOT_TAG: &str = "svg";
pub const RECT_TAG: &str = "rect";

/// Canvas and rectangles pulled out of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub metadata: CanvasMetadata,
    pub rectangles: Vec<Rectangle>,
}

/// Walk the tree once and collect canvas metadata plus the root's direct
/// `<rect>` children in document order.
///
/// A root that is not `<svg>` contributes nothing: zero canvas, no shapes.
#[must_use]
pub fn extract(root: &Element) -> Extraction {
    if root.name != ROOT_TAG {
        return Extraction { metadata: CanvasMetadata::default(), rectangles: Vec::new() };
    }

    Extraction { metadata: extract_metadata(root), rectangles: extract_rectangles(root) }
}

/// Resolve canvas width and height.
///
/// `width`/`height` attributes are tried first. Any axis left at zero falls
/// back to the matching `viewBox` token, provided the box has four tokens.
#[must_use]
pub fn extract_metadata(root: &Element) -> CanvasMetadata {
    let mut width = parse_dimension(root.attribute("width"));
    let mut height = parse_dimension(root.attribute("height"));

    if undetermined(width) || undetermined(height) {
        if let Some((box_width, box_height)) = root.attribute("viewBox").and_then(view_box_size) {
            if undetermined(width) {
                width = box_width;
            }
            if undetermined(height) {
                height = box_height;
            }
        }
    }

    CanvasMetadata { width, height }
}

/// Direct `<rect>` children of the root, in document order.
#[must_use]
pub fn extract_rectangles(root: &Element) -> Vec<Rectangle> {
    root.children_named(RECT_TAG)
        .map(|rect| Rectangle {
            x: number_or_zero(rect.attribute("x")),
            y: number_or_zero(rect.attribute("y")),
            width: number_or_zero(rect.attribute("width")),
            height: number_or_zero(rect.attribute("height")),
            fill: rect.attribute("fill").unwrap_or(DEFAULT_FILL).to_owned(),
        })
        .collect()
}

/// Read a canvas dimension such as `"100"`, `"100px"` or `"12.5mm"`.
///
/// Everything except ASCII digits and `.` is discarded before the leading
/// number is read, so unit suffixes (and any sign) disappear. Missing or
/// unreadable input yields `0.0`.
#[must_use]
pub fn parse_dimension(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    parse_number(&digits).filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Read the leading decimal number of `raw`, ignoring anything after it.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent. Returns `None` when no number starts
/// the string.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn undetermined(value: f64) -> bool {
    value <= 0.0
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number_or_zero(raw: Option<&str>) -> f64 {
    raw.and_then(parse_number).unwrap_or(0.0)
}

/// Width and height tokens of a `viewBox`, or `None` if fewer than four
/// tokens are present. An unreadable or non-positive token resolves to `0.0`
/// so the canvas area, and with it the coverage ratio, never goes negative.
fn view_box_size(raw: &str) -> Option<(f64, f64)> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }
    Some((view_box_extent(tokens[2]), view_box_extent(tokens[3])))
}

fn view_box_extent(token: &str) -> f64 {
    parse_number(token).filter(|v| *v > 0.0).unwrap_or(0.0)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
