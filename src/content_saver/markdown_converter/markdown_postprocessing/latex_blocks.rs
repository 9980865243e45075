//! Display-math wrapping for LaTeX environments.
//!
//! Statements with aligned equations or matrices contain bare
//! `\begin{env}..\end{env}` blocks. Outside `$$` the renderer shows them as
//! plain text.

use fancy_regex::Regex;
use std::sync::LazyLock;

/// A complete environment that is not already delimited by `$$`
///
/// - `(?s)` - environments span lines
/// - `(?<![$])(?<!\$\$\n)` - not directly after `$` or `$$` plus newline
/// - `\\begin\{([^{}]+)\}.*?\\end\{\1\}` - lazy body up to the matching `\end`
/// - `(?![$])(?!\n\$\$)` - not directly before `$` or newline plus `$$`
///
/// The `$$` plus newline checks match exactly what this stage emits, so
/// running it over its own output wraps nothing twice. Only these
/// fixed-width boundaries are checked: an environment separated from `$$` by
/// other whitespace is wrapped again.
static BARE_LATEX_ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?<![$])(?<!\$\$\n)\\begin\{([^{}]+)\}.*?\\end\{\1\}(?![$])(?!\n\$\$)")
        .expect("BARE_LATEX_ENVIRONMENT: hardcoded regex is valid")
});

/// Wrap each bare `\begin{..}..\end{..}` block in `$$\n..\n$$`.
#[must_use]
pub fn wrap_latex_environments(text: &str) -> String {
    if !text.contains("\\begin{") {
        return text.to_string();
    }
    BARE_LATEX_ENVIRONMENT
        .replace_all(text, |caps: &fancy_regex::Captures| {
            let block = caps.get(0).map_or("", |m| m.as_str());
            format!("$$\n{block}\n$$")
        })
        .into_owned()
}
