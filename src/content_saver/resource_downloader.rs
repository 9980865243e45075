//! Download of challenge resources into the challenge folder
//!
//! Every entry of a [`ResourceManifest`] is fetched concurrently and written
//! under its local filename. A failed download never fails the challenge: it
//! is logged and reported in [`DownloadReport::failures`] so the README's
//! local link can be fixed by hand.

use anyhow::{Context, Result};
use futures::StreamExt;
use futures::future::join_all;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

use super::markdown_converter::ResourceManifest;
use crate::utils::{DEFAULT_REQUEST_TIMEOUT_SECS, MAX_RESOURCE_SIZE};

/// Configuration for download timeouts and size limits
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Timeout for one resource download
    pub timeout: Duration,
    /// Maximum size of one resource (bytes)
    pub max_size: usize,
    /// Replace files that already exist
    pub overwrite: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_size: MAX_RESOURCE_SIZE,
            overwrite: false,
        }
    }
}

/// Error information for a failed resource download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFailure {
    pub filename: String,
    pub url: String,
    pub error: String,
}

/// Result of downloading a manifest with success and failure tracking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Filenames written by this run
    pub downloaded: Vec<String>,
    /// Filenames left alone because they already existed
    pub skipped: Vec<String>,
    pub failures: Vec<DownloadFailure>,
}

impl DownloadReport {
    /// Total number of resources processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.downloaded.len() + self.skipped.len() + self.failures.len()
    }

    /// Check if any failures occurred
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

enum Downloaded {
    Written(String),
    Skipped(String),
}

/// Download all manifest entries into `dir` concurrently
///
/// `dir` is created if needed. Individual failures are collected, not returned as `Err`.
pub async fn download_resources(
    manifest: &ResourceManifest,
    dir: &Path,
    client: &Client,
    config: &DownloadConfig,
) -> DownloadReport {
    let futures = manifest.iter().map(|(filename, url)| {
        let filename = filename.to_string();
        let url = url.to_string();
        let path = dir.join(&filename);

        async move {
            match download_resource(&url, &path, client, config).await {
                Ok(true) => Ok(Downloaded::Written(filename)),
                Ok(false) => Ok(Downloaded::Skipped(filename)),
                Err(e) => {
                    let error = format!("{e:#}");
                    log::warn!("Failed to download resource {filename} from {url}: {error}");
                    Err(DownloadFailure {
                        filename,
                        url,
                        error,
                    })
                }
            }
        }
    });

    // Execute all downloads concurrently
    let download_results = join_all(futures).await;

    // Partition into successes and failures
    let mut report = DownloadReport::default();
    for result in download_results {
        match result {
            Ok(Downloaded::Written(filename)) => report.downloaded.push(filename),
            Ok(Downloaded::Skipped(filename)) => report.skipped.push(filename),
            Err(failure) => report.failures.push(failure),
        }
    }

    report
}

/// Download one resource to `path`. Returns `false` when an existing file was kept.
async fn download_resource(
    url: &str,
    path: &Path,
    client: &Client,
    config: &DownloadConfig,
) -> Result<bool> {
    if !config.overwrite && tokio::fs::try_exists(path).await.unwrap_or(false) {
        log::debug!("Keeping existing resource {}", path.display());
        return Ok(false);
    }

    let bytes = fetch_with_limit(url, client, config).await?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Saved resource {} ({} bytes)", path.display(), bytes.len());
    Ok(true)
}

/// Stream a response body, enforcing the size limit before and during download
async fn fetch_with_limit(url: &str, client: &Client, config: &DownloadConfig) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .timeout(config.timeout)
        .send()
        .await
        .context("Failed to download resource")?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Resource download failed with status: {}",
            response.status()
        ));
    }

    // Get expected size and enforce limit BEFORE downloading
    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > config.max_size as u64 {
        return Err(anyhow::anyhow!(
            "Resource too large: {} bytes exceeds limit of {} bytes",
            expected_size,
            config.max_size
        ));
    }

    let mut buffer = Vec::with_capacity(usize::try_from(expected_size).unwrap_or(0));
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.context("Failed to read resource chunk")?;

        // Check BEFORE accumulating
        let new_total = buffer.len() + chunk.len();
        if new_total > config.max_size {
            return Err(anyhow::anyhow!(
                "Resource exceeded size limit during download: {} bytes (max: {})",
                new_total,
                config.max_size
            ));
        }

        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}
