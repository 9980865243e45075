//! Escaping of literal LaTeX braces.
//!
//! Set braces are written `\{a, b\}` in the source. The target renderer reads
//! the backslash as a Markdown escape and swallows it, so the brace reaches
//! the math engine bare and disappears. Doubling the backslash survives
//! Markdown unescaping as `\{`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A run of backslashes directly before a brace
///
/// An odd run ends in `\{`/`\}` (a literal brace, possibly after a `\\` line
/// break); an even run is line breaks followed by a group brace.
static BACKSLASHES_BEFORE_BRACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\+)([{}])").expect("BACKSLASHES_BEFORE_BRACE: hardcoded regex is valid")
});

/// `\{` → `\\{` and `\}` → `\\}`. Running it twice changes nothing.
#[must_use]
pub fn escape_latex_braces(text: &str) -> String {
    if !text.contains("\\{") && !text.contains("\\}") {
        return text.to_string();
    }
    BACKSLASHES_BEFORE_BRACE
        .replace_all(text, |caps: &Captures<'_>| {
            let run = &caps[1];
            let extra = if run.len() % 2 == 1 { "\\" } else { "" };
            format!("{run}{extra}{}", &caps[2])
        })
        .into_owned()
}
