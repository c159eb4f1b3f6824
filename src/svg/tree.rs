//! Markup parser producing a generic element tree.
//!
//! Tokenizing and well-formedness checks are delegated to `roxmltree`; this
//! module copies the element structure into owned [`Element`] nodes so later
//! stages never borrow the source text. Text, comments, and processing
//! instructions are dropped. Namespace prefixes are dropped from element and
//! attribute names.

/// Error returned when the input is not well-formed markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed markup at {line}:{column}: {message}")]
    Syntax { message: String, line: u32, column: u32 },
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::Syntax { message: err.to_string(), line: pos.row, column: pos.col }
    }
}

/// A markup element: tag name, attributes in document order, child elements
/// in document order. Repeated same-named children are kept as separate nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Value of the first attribute with this name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children with this tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Parse markup text into its root element.
///
/// Document type declarations are accepted (exported SVG files often carry
/// one) but entity expansion stays within `roxmltree`'s limits.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the text is not well-formed. No partial
/// tree is produced.
pub fn parse(text: &str) -> Result<Element, ParseError> {
    let options = roxmltree::ParsingOptions { allow_dtd: true, ..roxmltree::ParsingOptions::default() };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let attributes = node
        .attributes()
        .map(|attr| (attr.name().to_owned(), attr.value().to_owned()))
        .collect();
    let children = node
        .children()
        .filter(roxmltree::Node::is_element)
        .map(convert)
        .collect();

    Element { name: node.tag_name().name().to_owned(), attributes, children }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
