//! Batch orchestration
//!
//! Runs [`process_challenge`] over the configured range with at most
//! `max_concurrent_fetches` challenges in flight.

use anyhow::{Context, Result};
use futures::StreamExt;
use futures::stream;
use reqwest::Client;

use super::crawl_types::{ChallengeOutcome, RunSummary};
use super::page_processor::{ChallengeContext, process_challenge};
use crate::config::FetcherConfig;
use crate::page_fetcher::{HttpPageFetcher, PageFetcher};

/// Fetches and exports a range of challenges
pub struct ChallengeFetcher<F> {
    fetcher: F,
    client: Client,
}

impl ChallengeFetcher<HttpPageFetcher> {
    /// HTTP fetcher for `config`; resource downloads share its client
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config).context("Failed to create HTTP client")?;
        let client = fetcher.client().clone();
        Ok(Self { fetcher, client })
    }

    /// Fetch every challenge of `config` from the site
    ///
    /// ```rust,no_run
    /// # use challenge_fetcher::config::FetcherConfig;
    /// # use challenge_fetcher::crawl_engine::ChallengeFetcher;
    /// # async fn run() -> anyhow::Result<()> {
    /// let config = FetcherConfig::builder()
    ///     .output_dir("./challenges")
    ///     .challenge_range(1, 5)
    ///     .build()?;
    /// let summary = ChallengeFetcher::run(&config).await?;
    /// for outcome in &summary.outcomes {
    ///     println!("{outcome}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(config: &FetcherConfig) -> Result<RunSummary> {
        Ok(Self::new(config)?.fetch_all(config).await)
    }
}

impl<F: PageFetcher> ChallengeFetcher<F> {
    /// Use a custom page source; `client` is used for resource downloads
    pub fn with_fetcher(fetcher: F, client: Client) -> Self {
        Self { fetcher, client }
    }

    /// Process every challenge of `config`, returning outcomes sorted by number
    pub async fn fetch_all(&self, config: &FetcherConfig) -> RunSummary {
        let ctx = ChallengeContext {
            config,
            fetcher: &self.fetcher,
            client: &self.client,
        };
        let ctx = &ctx;

        tracing::info!(
            start = config.start_challenge(),
            end = config.end_challenge(),
            concurrency = config.max_concurrent_fetches(),
            "Starting challenge fetch"
        );

        let outcomes: Vec<ChallengeOutcome> = stream::iter(config.challenges())
            .map(|number| process_challenge(ctx, number))
            .buffer_unordered(config.max_concurrent_fetches().max(1))
            .collect()
            .await;

        let summary = RunSummary::new(outcomes);
        tracing::info!(
            exported = summary.exported(),
            failed = summary.failures(),
            "Challenge fetch finished"
        );
        summary
    }
}
