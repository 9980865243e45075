//! Core configuration types for challenge fetching
//!
//! This module contains the `FetcherConfig` struct describing one fetch run:
//! which challenges, where they go, and how the site is contacted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct for a challenge fetch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Directory the per-challenge folders are created in
    pub(crate) output_dir: PathBuf,

    /// First challenge to fetch (inclusive, >= 1)
    pub(crate) start_challenge: u32,

    /// Last challenge to fetch (inclusive, >= `start_challenge`)
    pub(crate) end_challenge: u32,

    /// Apply the GitHub math renderer workarounds to converted statements
    pub(crate) github_workaround: bool,

    /// Site base URL.
    ///
    /// **INVARIANT:** http(s) and ends with `/` (normalized in builder), so
    /// relative links can be appended directly.
    pub(crate) base_url: String,

    pub(crate) user_agent: String,

    /// Timeout in seconds for each HTTP request (page or resource)
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Attempts per page before a transient failure is reported, including
    /// the first request
    ///
    /// Default: 3
    pub(crate) max_retries: u32,

    /// Challenges processed at the same time
    ///
    /// Default: 4
    pub(crate) max_concurrent_fetches: usize,

    /// Replace an existing README.md instead of skipping the challenge
    pub(crate) overwrite: bool,

    /// Download images and data files referenced by the statement
    pub(crate) download_resources: bool,

    /// Write `challenge.json` next to the README
    pub(crate) save_json: bool,
}
