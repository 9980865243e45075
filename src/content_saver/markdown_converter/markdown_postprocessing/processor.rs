//! Ordered post-processing pipeline.

use super::latex_blocks::wrap_latex_environments;
use super::latex_escaping::escape_latex_braces;
use super::renderer_workarounds::{fold_trailing_words_into_math, replace_operatorname};
use super::whitespace_normalization::normalize_non_breaking_spaces;

type Stage = fn(&str) -> String;

/// Always applied, in this order
const STAGES: [(&str, Stage); 3] = [
    ("non-breaking spaces", normalize_non_breaking_spaces),
    ("latex braces", escape_latex_braces),
    ("latex environments", wrap_latex_environments),
];

/// Applied after [`STAGES`] when the renderer workaround is enabled
const RENDERER_STAGES: [(&str, Stage); 2] = [
    ("operatorname", replace_operatorname),
    ("trailing words", fold_trailing_words_into_math),
];

/// Run every post-processing stage over the assembled Markdown.
///
/// `github_workaround` enables the GitHub math renderer workarounds.
#[must_use]
pub fn postprocess_markdown(text: &str, github_workaround: bool) -> String {
    let renderer_stages: &[(&str, Stage)] = if github_workaround {
        &RENDERER_STAGES
    } else {
        &[]
    };

    STAGES
        .iter()
        .chain(renderer_stages)
        .fold(text.to_string(), |text, (name, stage)| {
            let processed = stage(&text);
            if processed != text {
                tracing::debug!(stage = *name, "Post-processing stage rewrote text");
            }
            processed
        })
}
