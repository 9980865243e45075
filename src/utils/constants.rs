//! Shared constants for challenge fetching
//!
//! Site layout and default values used throughout the codebase, kept here to
//! avoid magic strings in the converter, fetcher and exporter.

/// Base URL of the challenge site, with trailing slash
///
/// Every relative link on a challenge page resolves against this.
pub const URL_BASE: &str = "https://projecteuler.net/";

/// Query path of a challenge page, appended to the base URL with the number
pub const CHALLENGE_PATH_PREFIX: &str = "problem=";

/// Name of the Markdown file written into each challenge folder
pub const README_NAME: &str = "README.md";

/// Name of the optional JSON metadata file written next to the README
pub const JSON_NAME: &str = "challenge.json";

/// Challenge folders are zero padded to this width (`0001`, `0042`, `0500`)
pub const FOLDER_NAME_WIDTH: usize = 4;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("challenge_fetcher/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout: 30 seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default retry attempts per page, including the first one
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default number of challenges fetched at the same time
///
/// Kept low on purpose: the site is run by volunteers and rate limits
/// aggressive clients.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Largest resource file that will be downloaded: 50 MB
///
/// The biggest data files on the site are a few megabytes; anything larger
/// is not a challenge resource.
pub const MAX_RESOURCE_SIZE: usize = 50 * 1024 * 1024;
