//! Workarounds for GitHub's Markdown math renderer.
//!
//! Both are enabled together by the `github_workaround` option:
//!
//! - `\operatorname` is not supported (github/markup#1688), so it is rebuilt
//!   from `\mathop` and `\text`
//! - a closing `$` directly followed by a letter is not treated as a closing
//!   delimiter, so `$n$th` renders as raw text; the word is moved inside the
//!   expression

use regex::Regex;
use std::sync::LazyLock;

/// `\operatorname{<name>}<rest>=` with both groups lazy, within one line
static OPERATORNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\operatorname\{(.+?)\}(.+?)=").expect("OPERATORNAME: hardcoded regex is valid")
});

/// Inline math, optionally followed directly by a word
///
/// - `(?<![$\\])\$` - opening `$` that is neither escaped nor half of `$$`
/// - `(?P<expr>[^$\n]+)` - expression on a single line
/// - `\$(?![$])` - closing `$` that is not the start of `$$`
/// - `(?P<word>[\p{L}\p{N}]+)?` - the glued word, if any
static INLINE_MATH_WITH_WORD: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?<![$\\])\$(?P<expr>[^$\n]+)\$(?![$])(?P<word>[\p{L}\p{N}]+)?")
        .expect("INLINE_MATH_WITH_WORD: hardcoded regex is valid")
});

/// `\operatorname{lcm}(a,b)=` → `\mathop{\text{lcm}}(a,b)=`
#[must_use]
pub fn replace_operatorname(text: &str) -> String {
    if !text.contains("\\operatorname") {
        return text.to_string();
    }
    OPERATORNAME
        .replace_all(text, r"\mathop{\text{${1}}}${2}=")
        .into_owned()
}

/// `$n$th` → `$n\text{th}$`. Inline math without a glued word is unchanged.
#[must_use]
pub fn fold_trailing_words_into_math(text: &str) -> String {
    if !text.contains('$') {
        return text.to_string();
    }
    INLINE_MATH_WITH_WORD
        .replace_all(text, |caps: &fancy_regex::Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            match (caps.name("expr"), caps.name("word")) {
                (Some(expr), Some(word)) => {
                    format!("${}\\text{{{}}}$", expr.as_str(), word.as_str())
                }
                _ => whole.to_string(),
            }
        })
        .into_owned()
}
