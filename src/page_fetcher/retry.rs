//! Retry helper for page requests
//!
//! Retries transient [`FetchError`]s with exponential backoff from
//! [`RetryConfig`]. Permanent errors are returned immediately.

use std::future::Future;

use super::errors::{FetchResult, RetryConfig};

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts.
///
/// At least one attempt is always made, even when `max_attempts` is 0.
pub async fn retry_task<F, Fut, T>(config: &RetryConfig, mut operation: F) -> FetchResult<T>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = FetchResult<T>> + Send,
    T: Send,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!(attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => {
                if !e.is_transient() {
                    return Err(e);
                }

                if attempt + 1 >= config.max_attempts {
                    tracing::warn!(
                        attempts = attempt + 1,
                        error = %e,
                        "Max retry attempts exceeded"
                    );
                    return Err(e);
                }

                let delay = config.delay_for_attempt(attempt);
                attempt += 1;

                tracing::warn!(
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Transient error, retrying after delay"
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
