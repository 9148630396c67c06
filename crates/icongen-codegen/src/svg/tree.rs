//! Tree abstraction: optimized SVG markup to typed abstract nodes.

use icongen_core::{AbstractNode, Error, Result};
use std::path::Path;

/// Parses optimized SVG markup into one root [`AbstractNode`],
/// recursively including all element children.
///
/// Text and whitespace content is discarded; icon sources carry no
/// meaningful text nodes. `path` is only used to tag errors.
///
/// # Errors
///
/// Returns [`Error::Optimize`] if the markup is not well-formed XML.
///
/// # Examples
///
/// ```
/// use icongen_codegen::svg::tree::abstract_tree;
/// use std::path::Path;
///
/// let node = abstract_tree(
///     Path::new("home.svg"),
///     r#"<svg viewBox="0 0 16 16"><path d="M0 0h8"/></svg>"#,
/// )
/// .unwrap();
/// assert_eq!(node.tag, "svg");
/// assert_eq!(node.children.len(), 1);
/// assert_eq!(node.children[0].attrs["d"], "M0 0h8");
/// ```
pub fn abstract_tree(path: &Path, markup: &str) -> Result<AbstractNode> {
    let doc = roxmltree::Document::parse(markup).map_err(|err| Error::Optimize {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> AbstractNode {
    let mut abstract_node = AbstractNode::new(node.tag_name().name());
    for attr in node.attributes() {
        abstract_node
            .attrs
            .insert(attr.name().to_string(), attr.value().to_string());
    }
    abstract_node.children = node
        .children()
        .filter(roxmltree::Node::is_element)
        .map(convert)
        .collect();
    abstract_node
}
