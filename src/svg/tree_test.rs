use super::*;

#[test]
fn parse_keeps_repeated_siblings() {
    let root = parse(r##"<svg><rect x="1"/><rect x="2"/><rect x="3"/></svg>"##).unwrap();
    assert_eq!(root.name, "svg");
    assert_eq!(root.children.len(), 3);
    let xs: Vec<&str> = root.children_named("rect").filter_map(|r| r.attribute("x")).collect();
    assert_eq!(xs, vec!["1", "2", "3"]);
}

#[test]
fn parse_nested_and_self_closing_elements() {
    let root = parse(r#"<svg width="10"><g id="layer"><rect/></g><circle r="4"></circle></svg>"#).unwrap();
    assert_eq!(root.attribute("width"), Some("10"));
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].name, "g");
    assert_eq!(root.children[0].children[0].name, "rect");
    assert_eq!(root.children[1].name, "circle");
    assert_eq!(root.children[1].attribute("r"), Some("4"));
}

#[test]
fn parse_preserves_attribute_order() {
    let root = parse(r#"<svg height="2" width="1" viewBox="0 0 1 2"/>"#).unwrap();
    let names: Vec<&str> = root.attributes.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["height", "width", "viewBox"]);
}

#[test]
fn parse_drops_text_and_comments() {
    let root = parse("<svg><!-- note --><title>Logo</title>text<rect/></svg>").unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["title", "rect"]);
    assert!(root.children[0].children.is_empty());
}

#[test]
fn parse_strips_namespace_prefixes() {
    let input = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:rect width="3"/></svg:svg>"#;
    let root = parse(input).unwrap();
    assert_eq!(root.name, "svg");
    assert_eq!(root.children[0].name, "rect");
    assert_eq!(root.children[0].attribute("width"), Some("3"));
}

#[test]
fn parse_accepts_declaration_and_doctype() {
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" width="5"><rect/></svg>"#;
    let root = parse(input).unwrap();
    assert_eq!(root.name, "svg");
    assert_eq!(root.attribute("width"), Some("5"));
    assert_eq!(root.children.len(), 1);
}

#[test]
fn parse_rejects_unclosed_tag() {
    let err = parse("<svg><rect></svg>").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn parse_rejects_empty_input() {
    assert!(parse("").is_err());
    assert!(parse("not markup at all").is_err());
}

#[test]
fn parse_error_reports_position() {
    let err = parse("<svg>\n  <rect>\n</svg>").unwrap_err();
    let ParseError::Syntax { line, column, message } = &err;
    assert!(*line >= 2);
    assert!(*column >= 1);
    assert!(!message.is_empty());
    assert!(err.to_string().starts_with("malformed markup at "));
}

#[test]
fn attribute_returns_none_when_missing() {
    let el = Element::new("rect");
    assert_eq!(el.attribute("x"), None);
    assert_eq!(el.children_named("rect").count(), 0);
}
