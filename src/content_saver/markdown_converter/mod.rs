//! Challenge page to Markdown conversion pipeline
//!
//! Converts one challenge page into a [`ConversionResult`]:
//! 1. Locate the title and the description subtree
//! 2. Rewrite bold/italic, colour spans and tooltips in place
//! 3. Rewrite links and images, collecting the resource manifest
//! 4. Linearize the description into paragraphs
//! 5. Apply LaTeX escaping and the renderer workarounds
//!
//! Each pass takes ownership of the description subtree and hands it to the
//! next, so no pass ever sees a tree another pass is still reading.
//!
//! The pipeline is synchronous and performs no I/O. Callers converting many
//! pages concurrently should run it on a blocking thread.
//!
//! ```rust
//! # use challenge_fetcher::content_saver::markdown_converter::{convert_challenge_sync, ConversionOptions};
//! let html = r#"
//!     <div id="content">
//!         <h2>Multiples of 3 or 5</h2>
//!         <div class="problem_content"><p>Find the <b>sum</b> below $1000$.</p></div>
//!     </div>
//! "#;
//!
//! let result = convert_challenge_sync(html, "https://projecteuler.net/problem=1", &ConversionOptions::default())?;
//! assert_eq!(result.title, "Multiples of 3 or 5");
//! assert_eq!(result.markdown_body, "Find the **sum** below $1000$.");
//! assert!(result.resources.is_none());
//! # Ok::<(), challenge_fetcher::content_saver::markdown_converter::ConversionError>(())
//! ```

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

pub mod custom_handlers;
pub mod errors;
pub mod html_preprocessing;
pub mod html_to_markdown;
pub mod markdown_postprocessing;
pub mod types;

pub use custom_handlers::{
    CSS_BASIC_COLORS, LinkClassification, classify_url, convert_inline_formatting,
    rewrite_links, sanitize_resource_filename,
};
pub use errors::{ConversionError, ConvertResult};
pub use html_preprocessing::{ChallengeStructure, extract_challenge_structure};
pub use html_to_markdown::assemble_markdown;
pub use markdown_postprocessing::postprocess_markdown;
pub use types::{ConversionResult, ResourceManifest};

use crate::utils::URL_BASE;

/// Options for one challenge conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Apply the GitHub math renderer workarounds (default: true)
    ///
    /// Rewrites `\operatorname` and folds words glued to inline math into the
    /// expression.
    pub github_workaround: bool,

    /// Site base URL with trailing slash, used to resolve relative links
    /// (default: [`URL_BASE`])
    pub base_url: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            github_workaround: true,
            base_url: URL_BASE.to_string(),
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain conversion without renderer-specific rewrites
    #[must_use]
    pub fn without_workarounds() -> Self {
        Self {
            github_workaround: false,
            ..Self::default()
        }
    }
}

/// Parse `html` and convert the challenge it contains.
///
/// `source_url` is recorded unchanged as the result's canonical URL.
///
/// # Errors
///
/// Any [`ConversionError`]; there is no partial result.
pub fn convert_challenge_sync(
    html: &str,
    source_url: &str,
    options: &ConversionOptions,
) -> ConvertResult<ConversionResult> {
    let document = kuchiki::parse_html().one(html);
    convert_document(document, source_url, options)
}

/// Convert an already parsed challenge page.
///
/// The document is consumed: the description is rewritten destructively.
///
/// # Errors
///
/// Any [`ConversionError`]; there is no partial result.
pub fn convert_document(
    document: NodeRef,
    source_url: &str,
    options: &ConversionOptions,
) -> ConvertResult<ConversionResult> {
    let ChallengeStructure { title, description } = extract_challenge_structure(document)?;

    let description = convert_inline_formatting(description)?;
    let (description, manifest) = rewrite_links(description, &options.base_url)?;
    let assembled = assemble_markdown(description);
    let markdown_body = postprocess_markdown(&assembled, options.github_workaround);

    tracing::debug!(
        url = %source_url,
        resources = manifest.len(),
        "Converted challenge page"
    );

    Ok(ConversionResult {
        title,
        source_url: source_url.to_string(),
        markdown_body,
        resources: (!manifest.is_empty()).then_some(manifest),
    })
}
