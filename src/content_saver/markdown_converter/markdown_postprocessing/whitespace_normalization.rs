//! Whitespace normalization for assembled challenge text.

const NO_BREAK_SPACE: char = '\u{a0}';

/// Replace non-breaking spaces with ordinary spaces.
///
/// Challenge pages use `&nbsp;` to keep numbers and units together; in
/// Markdown it only gets in the way of the inline-math patterns that follow.
#[must_use]
pub fn normalize_non_breaking_spaces(text: &str) -> String {
    // Fast path: most statements have none
    if !text.contains(NO_BREAK_SPACE) {
        return text.to_string();
    }
    text.replace(NO_BREAK_SPACE, " ")
}
