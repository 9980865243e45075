//! HTTP implementation of [`PageFetcher`] backed by `reqwest`.

use reqwest::Client;

use super::errors::{FetchError, FetchResult, RetryConfig, is_transient_status};
use super::retry::retry_task;
use super::{FetchedPage, PageFetcher};
use crate::config::FetcherConfig;
use crate::utils::{challenge_url, is_valid_url};

/// Fetches challenge pages from the configured site
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
    retry: RetryConfig,
}

impl HttpPageFetcher {
    /// Build a client with the config's user agent and request timeout.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidUrl`] if the base URL is not http(s), or
    /// [`FetchError::Http`] if the client cannot be constructed.
    pub fn new(config: &FetcherConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()?;

        Self::with_client(
            client,
            config.base_url(),
            RetryConfig::with_max_attempts(config.max_retries()),
        )
    }

    /// Use an existing client, e.g. to share its connection pool.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidUrl`] if `base_url` is not http(s).
    pub fn with_client(client: Client, base_url: &str, retry: RetryConfig) -> FetchResult<Self> {
        if !is_valid_url(base_url) {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url: crate::utils::with_trailing_slash(base_url),
            retry,
        })
    }

    /// The underlying client, shared with the resource downloader
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn fetch_once(&self, number: u32, url: &str) -> FetchResult<FetchedPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        // Retried by the caller; a final transient status is turned back into a page
        if is_transient_status(status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok(FetchedPage {
            number,
            url: final_url,
            status,
            body,
        })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, number: u32) -> FetchResult<FetchedPage> {
        let url = challenge_url(&self.base_url, number);
        tracing::debug!(challenge = number, url = %url, "Fetching challenge page");

        match retry_task(&self.retry, || self.fetch_once(number, &url)).await {
            Ok(page) => Ok(page),
            Err(FetchError::Status { url, status }) => Ok(FetchedPage {
                number,
                url,
                status,
                body: String::new(),
            }),
            Err(e) => Err(e),
        }
    }
}
