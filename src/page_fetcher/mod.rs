//! Challenge page fetching
//!
//! The converter only needs raw markup and a success indicator for a
//! challenge number. [`PageFetcher`] is that seam: [`HttpPageFetcher`] talks
//! to the site, tests substitute their own implementation.

pub mod errors;
pub mod http_fetcher;
pub mod retry;

use std::future::Future;

use serde::{Deserialize, Serialize};

pub use errors::{FetchError, FetchResult, RetryConfig, is_transient_status};
pub use http_fetcher::HttpPageFetcher;
pub use retry::retry_task;

/// Raw response for one challenge page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    pub number: u32,
    /// URL the page was served from, after redirects
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Response body, empty when the request never succeeded
    pub body: String,
}

impl FetchedPage {
    /// 2xx status
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of challenge pages
pub trait PageFetcher: Send + Sync {
    /// Fetch the page for challenge `number`.
    ///
    /// A page the server refused is returned with a non-success status.
    /// `Err` means no usable answer was received at all.
    fn fetch(&self, number: u32) -> impl Future<Output = FetchResult<FetchedPage>> + Send;
}
