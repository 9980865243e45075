//! Custom handlers that rewrite challenge markup into Markdown in place
//!
//! Each handler walks a kuchiki subtree, and replaces the elements it has a
//! rule for with a text node holding their Markdown. Handlers consume the
//! subtree they are given and hand it back, so a pass never reads a tree that
//! a later pass already rewrote.

pub mod filename_sanitizer;
pub mod inline_element_handler;
pub mod link_classifier;
pub mod link_handler;

use kuchiki::NodeRef;

pub use filename_sanitizer::sanitize_resource_filename;
pub use inline_element_handler::{CSS_BASIC_COLORS, convert_inline_formatting};
pub use link_classifier::{LinkClassification, classify_url, site_relative};
pub use link_handler::rewrite_links;

/// Lower-case local tag name, `None` for non-element nodes
pub(crate) fn element_name(node: &NodeRef) -> Option<String> {
    node.as_element()
        .map(|element| element.name.local.to_ascii_lowercase().to_string())
}

/// Attribute value, filtering empty values
pub(crate) fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes
        .get(name)
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
}

/// The element's `class` attribute when it holds exactly one class name
pub(crate) fn single_class(node: &NodeRef) -> Option<String> {
    let class = get_attribute(node, "class")?;
    let mut names = class.split_whitespace();
    let first = names.next()?;
    names.next().is_none().then(|| first.to_string())
}

/// Elements below `root` (not `root` itself) in document order
pub(crate) fn collect_elements<F>(root: &NodeRef, mut predicate: F) -> Vec<NodeRef>
where
    F: FnMut(&str, &NodeRef) -> bool,
{
    root.descendants()
        .filter(|node| element_name(node).is_some_and(|tag| predicate(&tag, node)))
        .collect()
}

/// Replace `node` with a single text node
pub(crate) fn replace_with_text(node: &NodeRef, text: &str) {
    node.insert_before(NodeRef::new_text(text));
    node.detach();
}

#[cfg(test)]
pub(crate) mod test_util {
    use kuchiki::NodeRef;
    use kuchiki::traits::TendrilSink;

    /// Parse a fragment and return its detached `<div class="problem_content">`
    pub(crate) fn description(inner_html: &str) -> NodeRef {
        let html = format!(r#"<div class="problem_content">{inner_html}</div>"#);
        let document = kuchiki::parse_html().one(html);
        let node = document
            .select_first("div.problem_content")
            .expect("fixture has a description")
            .as_node()
            .clone();
        node.detach();
        node
    }
}
