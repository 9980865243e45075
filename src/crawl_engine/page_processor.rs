//! Single challenge processing logic
//!
//! Handles the complete lifecycle of one challenge:
//! - Page fetch
//! - Conversion on a blocking thread
//! - README and optional JSON export
//! - Resource download

use reqwest::Client;

use super::crawl_types::ChallengeOutcome;
use crate::config::FetcherConfig;
use crate::content_saver::markdown_converter::{
    ConversionResult, ConvertResult, convert_challenge_sync,
};
use crate::content_saver::{
    DownloadConfig, DownloadReport, ExportStatus, download_resources, save_json_data,
    save_markdown_content,
};
use crate::page_fetcher::{FetchedPage, PageFetcher};
use crate::utils::challenge_dir;

/// Shared state for processing challenges
pub struct ChallengeContext<'a, F> {
    pub config: &'a FetcherConfig,
    pub fetcher: &'a F,
    /// Client used for resource downloads
    pub client: &'a Client,
}

/// Fetch, convert and export one challenge
///
/// Never returns early with an error: every failure becomes a
/// [`ChallengeOutcome`] so one bad challenge does not stop the batch.
pub async fn process_challenge<F: PageFetcher>(
    ctx: &ChallengeContext<'_, F>,
    number: u32,
) -> ChallengeOutcome {
    tracing::info!(challenge = number, "Processing challenge");

    let page = match ctx.fetcher.fetch(number).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(challenge = number, error = %e, "Fetch failed");
            return ChallengeOutcome::FetchFailed {
                number,
                reason: e.to_string(),
            };
        }
    };

    if !page.is_success() {
        tracing::warn!(challenge = number, status = page.status, url = %page.url, "Page not available");
        return ChallengeOutcome::FetchFailed {
            number,
            reason: format!("HTTP {} from {}", page.status, page.url),
        };
    }

    let result = match convert_page(ctx.config, page).await {
        Ok(Ok(result)) => result,
        Ok(Err(error)) => {
            tracing::warn!(challenge = number, error = %error, "Conversion failed");
            return ChallengeOutcome::ConversionFailed { number, error };
        }
        Err(reason) => return ChallengeOutcome::Aborted { number, reason },
    };

    export_challenge(ctx, number, &result).await
}

/// Run the synchronous converter on the blocking pool
async fn convert_page(
    config: &FetcherConfig,
    page: FetchedPage,
) -> Result<ConvertResult<ConversionResult>, String> {
    let options = config.conversion_options();
    let FetchedPage { url, body, .. } = page;

    tokio::task::spawn_blocking(move || convert_challenge_sync(&body, &url, &options))
        .await
        .map_err(|e| format!("Conversion task failed: {e}"))
}

async fn export_challenge<F>(
    ctx: &ChallengeContext<'_, F>,
    number: u32,
    result: &ConversionResult,
) -> ChallengeOutcome {
    let config = ctx.config;

    let saved =
        save_markdown_content(number, result, config.output_dir(), config.overwrite()).await;
    let status = match saved {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(challenge = number, error = %format!("{e:#}"), "Export failed");
            return ChallengeOutcome::Aborted {
                number,
                reason: format!("{e:#}"),
            };
        }
    };

    if status != ExportStatus::Ok {
        return ChallengeOutcome::Exported {
            number,
            status,
            resources: None,
        };
    }

    if config.save_json()
        && let Err(e) = save_json_data(number, result, config.output_dir()).await
    {
        tracing::warn!(challenge = number, error = %format!("{e:#}"), "Saving JSON failed");
    }

    let resources = match &result.resources {
        Some(manifest) if config.download_resources() => {
            let download_config = DownloadConfig {
                timeout: config.request_timeout(),
                overwrite: config.overwrite(),
                ..DownloadConfig::default()
            };
            let dir = challenge_dir(config.output_dir(), number);
            let report: DownloadReport =
                download_resources(manifest, &dir, ctx.client, &download_config).await;
            Some(report)
        }
        _ => None,
    };

    ChallengeOutcome::Exported {
        number,
        status,
        resources,
    }
}
