//! Getter methods for `FetcherConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `FetcherConfig` instance.

use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use super::types::FetcherConfig;
use crate::content_saver::markdown_converter::ConversionOptions;

impl FetcherConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn start_challenge(&self) -> u32 {
        self.start_challenge
    }

    #[must_use]
    pub fn end_challenge(&self) -> u32 {
        self.end_challenge
    }

    /// Every challenge number of the run, in order
    #[must_use]
    pub fn challenges(&self) -> RangeInclusive<u32> {
        self.start_challenge..=self.end_challenge
    }

    #[must_use]
    pub fn github_workaround(&self) -> bool {
        self.github_workaround
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[must_use]
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    #[must_use]
    pub fn download_resources(&self) -> bool {
        self.download_resources
    }

    #[must_use]
    pub fn save_json(&self) -> bool {
        self.save_json
    }

    /// Options for the page converter derived from this config
    #[must_use]
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            github_workaround: self.github_workaround,
            base_url: self.base_url.clone(),
        }
    }
}
