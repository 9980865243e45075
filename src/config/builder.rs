//! Type-safe builder for `FetcherConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that required fields are set before building a `FetcherConfig`.

use crate::utils::{
    DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, URL_BASE, is_valid_url, with_trailing_slash,
};
use anyhow::{Result, anyhow, bail};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::FetcherConfig;

// Type states for the builder
pub struct WithOutputDir;
pub struct WithChallengeRange;

pub struct FetcherConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) challenge_range: Option<(u32, u32)>,
    pub(crate) github_workaround: bool,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) request_timeout_secs: u64,
    pub(crate) max_retries: u32,
    pub(crate) max_concurrent_fetches: usize,
    pub(crate) overwrite: bool,
    pub(crate) download_resources: bool,
    pub(crate) save_json: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for FetcherConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            challenge_range: None,
            github_workaround: true,
            base_url: URL_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            overwrite: false,
            download_resources: true,
            save_json: false,
            _phantom: PhantomData,
        }
    }
}

impl FetcherConfig {
    /// Create a builder for configuring a `FetcherConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> FetcherConfigBuilder<()> {
        FetcherConfigBuilder::default()
    }
}

impl<State> FetcherConfigBuilder<State> {
    /// Move every field into a builder of another state
    fn transition<Next>(self) -> FetcherConfigBuilder<Next> {
        FetcherConfigBuilder {
            output_dir: self.output_dir,
            challenge_range: self.challenge_range,
            github_workaround: self.github_workaround,
            base_url: self.base_url,
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            max_retries: self.max_retries,
            max_concurrent_fetches: self.max_concurrent_fetches,
            overwrite: self.overwrite,
            download_resources: self.download_resources,
            save_json: self.save_json,
            _phantom: PhantomData,
        }
    }
}

impl FetcherConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> FetcherConfigBuilder<WithOutputDir> {
        let mut next = self.transition();
        next.output_dir = Some(dir.into());
        next
    }
}

impl FetcherConfigBuilder<WithOutputDir> {
    /// Inclusive range of challenge numbers to fetch
    pub fn challenge_range(self, start: u32, end: u32) -> FetcherConfigBuilder<WithChallengeRange> {
        let mut next = self.transition();
        next.challenge_range = Some((start, end));
        next
    }
}

// Build method only available when all required fields are set
impl FetcherConfigBuilder<WithChallengeRange> {
    pub fn build(self) -> Result<FetcherConfig> {
        let output_dir = self
            .output_dir
            .ok_or_else(|| anyhow!("output_dir is required"))?;
        let (start_challenge, end_challenge) = self
            .challenge_range
            .ok_or_else(|| anyhow!("challenge_range is required"))?;

        if start_challenge == 0 {
            bail!("The start challenge must be at least 1 (got {start_challenge})");
        }
        if end_challenge < start_challenge {
            bail!(
                "The end challenge ({end_challenge}) must not be before the start challenge ({start_challenge})"
            );
        }
        if self.max_concurrent_fetches < 1 {
            bail!("max_concurrent_fetches must be at least 1");
        }
        if !is_valid_url(&self.base_url) {
            bail!("base_url must be an http(s) URL (got '{}')", self.base_url);
        }

        Ok(FetcherConfig {
            output_dir,
            start_challenge,
            end_challenge,
            github_workaround: self.github_workaround,
            base_url: with_trailing_slash(&self.base_url),
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            max_retries: self.max_retries,
            max_concurrent_fetches: self.max_concurrent_fetches,
            overwrite: self.overwrite,
            download_resources: self.download_resources,
            save_json: self.save_json,
        })
    }
}
