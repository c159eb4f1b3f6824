use super::*;
use crate::svg::types::IssueKind;

fn rect(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
    Rectangle { x, y, width, height, ..Rectangle::default() }
}

// =============================================================================
// COVERAGE
// =============================================================================

#[test]
fn coverage_is_area_ratio() {
    let ratio = coverage_ratio(&[rect(0.0, 0.0, 50.0, 50.0)], 100.0, 100.0);
    assert!((ratio - 0.25).abs() < f64::EPSILON);
}

#[test]
fn coverage_sums_all_rectangles() {
    let rects = [rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 50.0, 20.0, 5.0)];
    let ratio = coverage_ratio(&rects, 100.0, 100.0);
    assert!((ratio - 0.02).abs() < 1e-12);
}

#[test]
fn coverage_is_not_clamped_above_one() {
    let rects = [rect(0.0, 0.0, 100.0, 100.0), rect(0.0, 0.0, 100.0, 100.0)];
    let ratio = coverage_ratio(&rects, 100.0, 100.0);
    assert!((ratio - 2.0).abs() < f64::EPSILON);
}

#[test]
fn coverage_zero_for_zero_canvas() {
    let rects = [rect(0.0, 0.0, 10.0, 10.0)];
    assert!(coverage_ratio(&rects, 0.0, 100.0).abs() < f64::EPSILON);
    assert!(coverage_ratio(&rects, 100.0, 0.0).abs() < f64::EPSILON);
    assert!(coverage_ratio(&rects, 0.0, 0.0).abs() < f64::EPSILON);
}

#[test]
fn coverage_zero_without_rectangles() {
    assert!(coverage_ratio(&[], 100.0, 100.0).abs() < f64::EPSILON);
}

#[test]
fn coverage_never_negative() {
    let rects = [rect(0.0, 0.0, -10.0, 10.0)];
    assert!(coverage_ratio(&rects, 100.0, 100.0).abs() < f64::EPSILON);
}

// =============================================================================
// ISSUES
// =============================================================================

#[test]
fn empty_document_yields_single_empty_issue() {
    let issues = detect_issues(&[], 100.0, 100.0);
    assert_eq!(issues, vec![Issue::empty()]);
    assert_eq!(issues[0].kind, IssueKind::Empty);
    assert_eq!(issues[0].rectangle_id, None);
    assert_eq!(issues[0].message, "No rectangle elements were found in the SVG.");
}

#[test]
fn empty_document_skips_bounds_even_on_zero_canvas() {
    let issues = detect_issues(&[], 0.0, 0.0);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Empty);
}

#[test]
fn rectangle_touching_edge_is_in_bounds() {
    assert!(detect_issues(&[rect(0.0, 0.0, 100.0, 100.0)], 100.0, 100.0).is_empty());
}

#[test]
fn rectangle_past_right_edge_is_flagged() {
    let issues = detect_issues(&[rect(1.0, 0.0, 100.0, 10.0)], 100.0, 100.0);
    assert_eq!(issues, vec![Issue::out_of_bounds(0)]);
    assert_eq!(issues[0].rectangle_id.as_deref(), Some("0"));
    assert_eq!(
        issues[0].message,
        "Rectangle extends beyond SVG boundaries (x + width or y + height exceeds canvas)."
    );
}

#[test]
fn rectangle_past_bottom_edge_is_flagged() {
    let issues = detect_issues(&[rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 91.0, 10.0, 10.0)], 100.0, 100.0);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rectangle_id.as_deref(), Some("1"));
}

#[test]
fn each_offending_rectangle_gets_its_own_issue() {
    let rects = [
        rect(90.0, 90.0, 20.0, 20.0),
        rect(0.0, 0.0, 5.0, 5.0),
        rect(0.0, 0.0, 200.0, 5.0),
        rect(0.0, 99.0, 5.0, 2.0),
    ];
    let ids: Vec<String> = detect_issues(&rects, 100.0, 100.0)
        .into_iter()
        .filter_map(|issue| issue.rectangle_id)
        .collect();
    assert_eq!(ids, vec!["0", "2", "3"]);
}

#[test]
fn negative_origin_alone_is_not_flagged() {
    assert!(detect_issues(&[rect(-10.0, -10.0, 5.0, 5.0)], 100.0, 100.0).is_empty());
    assert_eq!(detect_issues(&[rect(-10.0, 0.0, 120.0, 5.0)], 100.0, 100.0).len(), 1);
}

#[test]
fn zero_canvas_flags_any_positive_extent() {
    let issues = detect_issues(&[rect(0.0, 0.0, 1.0, 0.0), rect(0.0, 0.0, 0.0, 0.0)], 0.0, 0.0);
    assert_eq!(issues, vec![Issue::out_of_bounds(0)]);
}
