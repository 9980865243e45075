//! Builder methods available for all states
//!
//! This module contains the optional settings, which can be called on the
//! builder regardless of its current type state.

use super::builder::FetcherConfigBuilder;

impl<State> FetcherConfigBuilder<State> {
    /// Enable or disable the GitHub math renderer workarounds (default: enabled)
    ///
    /// GitHub does not render `\operatorname`, and does not close inline math
    /// when the closing `$` is directly followed by a letter. With the
    /// workaround enabled both are rewritten into forms it does render.
    /// Disable it when the Markdown is meant for another viewer.
    #[must_use]
    pub fn github_workaround(mut self, enabled: bool) -> Self {
        self.github_workaround = enabled;
        self
    }

    /// Site to fetch from (default: `https://projecteuler.net/`)
    ///
    /// Mostly useful for tests against a local mirror. A missing trailing
    /// slash is added by `build()`.
    ///
    /// # Example
    /// ```rust
    /// # use challenge_fetcher::config::FetcherConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = FetcherConfig::builder()
    ///     .output_dir("./challenges")
    ///     .challenge_range(1, 10)
    ///     .base_url("http://127.0.0.1:8080")
    ///     .build()?;
    /// assert_eq!(config.base_url(), "http://127.0.0.1:8080/");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set attempts per page for transient failures (timeouts, connection
    /// errors, 5xx and 429 responses). Retries use exponential backoff.
    ///
    /// A value of 0 or 1 disables retrying.
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub fn max_concurrent_fetches(mut self, limit: usize) -> Self {
        self.max_concurrent_fetches = limit;
        self
    }

    /// Replace README.md files that already exist (default: skip them)
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn download_resources(mut self, download: bool) -> Self {
        self.download_resources = download;
        self
    }

    #[must_use]
    pub fn save_json(mut self, save: bool) -> Self {
        self.save_json = save;
        self
    }
}
