//! Linearization of a rewritten description into one Markdown string.
//!
//! By the time this runs, every formatting element, link and image has been
//! replaced with Markdown text. What is left is block structure: each direct
//! child of the description (usually a `<p>`, `<div>` or `<table>`) becomes
//! one paragraph separated from its neighbours by a blank line.

use kuchiki::NodeRef;

/// Join the text of each non-blank child of `description` into paragraphs.
///
/// Whitespace inside a child is preserved except for leading/trailing line
/// breaks, so an accidental newline inside inline content never splits a
/// paragraph. Whitespace-only children (indentation between blocks) are
/// dropped.
#[must_use]
pub fn assemble_markdown(description: NodeRef) -> String {
    let mut markdown = String::new();

    for child in description.children() {
        let text = child.text_contents();
        if text.trim().is_empty() {
            continue;
        }

        markdown.push('\n');
        markdown.push_str(trim_line_breaks(&text));
        markdown.push('\n');
    }

    markdown.trim().to_string()
}

fn trim_line_breaks(text: &str) -> &str {
    text.trim_matches(|c| c == '\n' || c == '\r')
}
