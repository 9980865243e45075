//! URL and path helpers for challenge pages and their output folders.

use std::path::{Path, PathBuf};

use super::constants::{CHALLENGE_PATH_PREFIX, FOLDER_NAME_WIDTH};

/// Canonical URL of a challenge page
///
/// `base_url` must end with `/`, as the config builder guarantees.
#[must_use]
pub fn challenge_url(base_url: &str, number: u32) -> String {
    format!("{base_url}{CHALLENGE_PATH_PREFIX}{number}")
}

/// Zero-padded folder name for a challenge, e.g. `0001`
#[must_use]
pub fn challenge_folder_name(number: u32) -> String {
    format!("{number:0width$}", width = FOLDER_NAME_WIDTH)
}

/// Folder a challenge is exported into
#[must_use]
pub fn challenge_dir(output_dir: &Path, number: u32) -> PathBuf {
    output_dir.join(challenge_folder_name(number))
}

/// Check that a URL parses and uses an http(s) scheme
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Append the trailing `/` relative links are resolved against
#[must_use]
pub fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
