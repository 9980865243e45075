//! Local filenames for downloaded challenge resources.
//!
//! The site keeps every image and data file in a handful of shared
//! directories, so remote names carry a unique-id prefix (`p096_sudoku.txt`,
//! `0022_names.txt`) and sometimes a cache-busting query string. Once a file
//! lives in its own challenge folder only the human readable part is needed.

use regex::Regex;
use std::sync::LazyLock;

use super::super::errors::{ConversionError, ConvertResult};

/// Matches `[<id>_]<name>.<ext>[?<query>]` at the end of a path.
///
/// - `(?:[A-Za-z0-9]+_)?` - one optional identifier segment; it cannot contain
///   an underscore, so later underscores stay in the name
/// - `(?P<name>[^/?]*\.[^/?]*)` - the kept filename, at least one `.`
/// - `(?:\?.*)?$` - optional query string, dropped
static RESOURCE_FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(?:[A-Za-z0-9]+_)?(?P<name>[^/?]*\.[^/?]*)(?:\?.*)?$")
        .expect("RESOURCE_FILENAME_RE: hardcoded regex is valid")
});

/// Strip the unique-id prefix, any directories and any query string from a
/// resource path, keeping the extension.
///
/// ```rust
/// # use challenge_fetcher::content_saver::markdown_converter::sanitize_resource_filename;
/// assert_eq!(sanitize_resource_filename("p096_sudoku.txt?1678992055").unwrap(), "sudoku.txt");
/// assert_eq!(sanitize_resource_filename("0099_base_exp.txt").unwrap(), "base_exp.txt");
/// # Ok::<(), challenge_fetcher::content_saver::markdown_converter::ConversionError>(())
/// ```
///
/// # Errors
///
/// [`ConversionError::Format`] when no `name.ext` can be located.
pub fn sanitize_resource_filename(raw: &str) -> ConvertResult<String> {
    let name = RESOURCE_FILENAME_RE
        .captures(raw)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .filter(|name| is_usable_filename(name))
        .ok_or_else(|| ConversionError::Format {
            input: raw.to_string(),
        })?;

    Ok(name.to_string())
}

/// A stem and an extension are both required: `.txt` and `notes.` are rejected
fn is_usable_filename(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty(),
        None => false,
    }
}
