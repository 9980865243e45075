//! Title and description extraction from a parsed challenge page.
//!
//! The page layout is assumed stable. A missing anchor means the site changed
//! and is reported as [`ConversionError::StructureNotFound`] instead of
//! producing an empty document.

use kuchiki::NodeRef;

use super::super::errors::{ConversionError, ConvertResult};

/// Container of the challenge, the only part of the page that is read
pub const CONTENT_SELECTOR: &str = "#content";

/// Challenge title, inside [`CONTENT_SELECTOR`]
pub const TITLE_SELECTOR: &str = "h2";

/// Challenge statement, inside [`CONTENT_SELECTOR`]
pub const DESCRIPTION_SELECTOR: &str = "div.problem_content";

/// The two regions of a challenge page the converter works on
#[derive(Debug)]
pub struct ChallengeStructure {
    /// Trimmed text of the title heading
    pub title: String,
    /// Statement subtree, detached from the page
    pub description: NodeRef,
}

/// Locate title and description in `document`.
///
/// The description is detached so later passes own it outright; the rest of
/// the document is dropped.
///
/// # Errors
///
/// [`ConversionError::StructureNotFound`] naming the selector that matched nothing.
pub fn extract_challenge_structure(document: NodeRef) -> ConvertResult<ChallengeStructure> {
    let content = select_node(&document, CONTENT_SELECTOR)?;
    let title = select_node(&content, TITLE_SELECTOR)?
        .text_contents()
        .trim()
        .to_string();
    let description = select_node(&content, DESCRIPTION_SELECTOR)?;
    description.detach();

    tracing::debug!(title = %title, "Located challenge structure");

    Ok(ChallengeStructure { title, description })
}

fn select_node(root: &NodeRef, selector: &str) -> ConvertResult<NodeRef> {
    root.select_first(selector)
        .map(|found| found.as_node().clone())
        .map_err(|()| ConversionError::structure_not_found(selector))
}
