//! Inline formatting → Markdown / inline LaTeX
//!
//! Handles the small, closed set of formatting markup used in challenge
//! statements:
//!
//! - `<b>`/`<strong>` → `**text**`, `<i>`/`<em>` → `*text*`
//! - `<span class="red">` (any CSS basic colour keyword) →
//!   `${\color{red}{text}}$`, prefixed with `\bf`/`\it` when the span holds
//!   bold/italic children
//! - `<span class="tooltip">visible<span class="tooltiptext">tip</span></span>` →
//!   `[visible](## "tip")`
//!
//! Tooltips and colour spans run before bold/italic: once a span is flattened
//! into LaTeX the emphasis inside it can only be expressed as `\bf`/`\it`,
//! which needs the `<b>`/`<i>` children to still be elements.

use kuchiki::NodeRef;

use super::super::errors::{ConversionError, ConvertResult};
use super::{collect_elements, element_name, replace_with_text, single_class};

/// The 16 CSS basic colour keywords
pub const CSS_BASIC_COLORS: [&str; 16] = [
    "black", "silver", "gray", "white", "maroon", "red", "purple", "fuchsia", "green", "lime",
    "olive", "yellow", "navy", "blue", "teal", "aqua",
];

const TOOLTIP_TEXT_CLASS: &str = "tooltiptext";

/// Rewrite every supported formatting element below `description`.
///
/// # Errors
///
/// [`ConversionError::UnsupportedElement`] when a tooltip is not shaped as
/// expected, or a tooltip or colour span holds markup without a rule.
pub fn convert_inline_formatting(description: NodeRef) -> ConvertResult<NodeRef> {
    convert_tooltips(&description)?;
    convert_color_spans(&description)?;
    convert_emphasis(&description)?;
    Ok(description)
}

fn is_bold_tag(tag: &str) -> bool {
    matches!(tag, "b" | "strong")
}

fn is_italic_tag(tag: &str) -> bool {
    matches!(tag, "i" | "em")
}

fn emphasis_marker(tag: &str) -> Option<&'static str> {
    if is_bold_tag(tag) {
        Some("**")
    } else if is_italic_tag(tag) {
        Some("*")
    } else {
        None
    }
}

/// Colour keyword of a `<span>` whose only class is a basic colour
fn span_color(tag: &str, node: &NodeRef) -> Option<&'static str> {
    if tag != "span" {
        return None;
    }
    let class = single_class(node)?;
    CSS_BASIC_COLORS
        .iter()
        .copied()
        .find(|color| color.eq_ignore_ascii_case(&class))
}

fn is_tooltip_text(tag: &str, node: &NodeRef) -> bool {
    tag == "span" && single_class(node).is_some_and(|class| class == TOOLTIP_TEXT_CLASS)
}

// =============================================================================
// Bold / italic
// =============================================================================

/// Replace bold/italic elements, innermost first so nested emphasis stacks
/// (`<b><i>x</i></b>` → `***x***`).
///
/// The element is unwrapped rather than flattened: its children stay in the
/// tree between the two markers, so links and images inside it are still
/// there for the link pass.
fn convert_emphasis(root: &NodeRef) -> ConvertResult<()> {
    let targets = collect_elements(root, |tag, _| emphasis_marker(tag).is_some());

    for node in targets.into_iter().rev() {
        let tag = element_name(&node).unwrap_or_else(|| "#text".to_string());
        let marker = emphasis_marker(&tag)
            .ok_or_else(|| ConversionError::unsupported(tag.as_str(), "bold/italic conversion"))?;
        unwrap_with_marker(&node, marker);
    }

    Ok(())
}

/// Move the children of `node` out between two `marker`s, keeping leading
/// and trailing whitespace outside the markers (`** x **` is not emphasis in
/// CommonMark). Blank elements without markup become their bare text.
fn unwrap_with_marker(node: &NodeRef, marker: &str) {
    let content = node.text_contents();
    if content.trim().is_empty() && collect_elements(node, |_, _| true).is_empty() {
        replace_with_text(node, &content);
        return;
    }

    let leading = take_edge_whitespace(node.first_child(), Edge::Start);
    let trailing = take_edge_whitespace(node.last_child(), Edge::End);

    node.insert_before(NodeRef::new_text(format!("{leading}{marker}")));
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        node.insert_before(child);
    }
    node.insert_before(NodeRef::new_text(format!("{marker}{trailing}")));
    node.detach();
}

#[derive(Clone, Copy)]
enum Edge {
    Start,
    End,
}

/// Cut the whitespace at one edge of a text node, returning it
fn take_edge_whitespace(child: Option<NodeRef>, edge: Edge) -> String {
    let Some(child) = child else {
        return String::new();
    };
    let Some(text) = child.as_text() else {
        return String::new();
    };

    let mut text = text.borrow_mut();
    match edge {
        Edge::Start => {
            let cut = text.len() - text.trim_start().len();
            text.drain(..cut).collect()
        }
        Edge::End => {
            let keep = text.trim_end().len();
            text.split_off(keep)
        }
    }
}

// =============================================================================
// Colour spans
// =============================================================================

/// Replace colour spans with inline LaTeX. Spans with any other class are
/// left for the text assembler; they may be serving an unrelated purpose.
///
/// LaTeX cannot hold Markdown, so any markup inside a colour span other than
/// bold/italic (a link, an image) is rejected.
fn convert_color_spans(root: &NodeRef) -> ConvertResult<()> {
    let targets = collect_elements(root, |tag, node| span_color(tag, node).is_some());

    for node in targets.into_iter().rev() {
        let Some(color) = element_name(&node).and_then(|tag| span_color(&tag, &node)) else {
            continue;
        };
        if let Some(tag) = collect_elements(&node, |tag, _| !is_bold_tag(tag) && !is_italic_tag(tag))
            .first()
            .and_then(element_name)
        {
            return Err(ConversionError::unsupported(tag, "colour span"));
        }
        let latex = color_span_latex(&node, color);
        replace_with_text(&node, &latex);
    }

    Ok(())
}

fn color_span_latex(node: &NodeRef, color: &str) -> String {
    let bold = !collect_elements(node, |tag, _| is_bold_tag(tag)).is_empty();
    let italic = !collect_elements(node, |tag, _| is_italic_tag(tag)).is_empty();

    let mut prefix = String::new();
    if bold {
        prefix.push_str(r"\bf ");
    }
    if italic {
        prefix.push_str(r"\it ");
    }

    let text = node.text_contents();
    let content = strip_math_delimiters(text.trim());
    format!("${{{prefix}\\color{{{color}}}{{{content}}}}}$")
}

/// `$x$` → `x`; the span is about to become a math expression itself
fn strip_math_delimiters(text: &str) -> &str {
    text.strip_prefix('$')
        .and_then(|rest| rest.strip_suffix('$'))
        .filter(|inner| !inner.contains('$'))
        .unwrap_or(text)
}

// =============================================================================
// Tooltips
// =============================================================================

/// Replace `<span class="tooltiptext">` and its trigger with a titled link to `##`.
fn convert_tooltips(root: &NodeRef) -> ConvertResult<()> {
    let tips = collect_elements(root, is_tooltip_text);

    for tip in tips.into_iter().rev() {
        let trigger = tip
            .parent()
            .filter(|parent| parent.as_element().is_some() && parent != root)
            .ok_or_else(|| ConversionError::unsupported(TOOLTIP_TEXT_CLASS, "tooltip without a trigger element"))?;

        let tooltip = tip.text_contents().trim().replace('"', "\\\"");
        tip.detach();

        // Formatting on the visible text is applied before it becomes link text
        convert_color_spans(&trigger)?;
        convert_emphasis(&trigger)?;

        if let Some(leftover) = trigger.descendants().find(|node| node.as_element().is_some()) {
            let tag = element_name(&leftover).unwrap_or_default();
            return Err(ConversionError::unsupported(tag, "tooltip text"));
        }

        let visible = trigger.text_contents();
        let markdown = format!("[{}](## \"{}\")", visible.trim(), tooltip);
        tracing::debug!(tooltip = %tooltip, "Converted tooltip span");
        replace_with_text(&trigger, &markdown);
    }

    Ok(())
}
