//! Fetches Project Euler challenges and converts them into Markdown folders.
//!
//! The core is [`content_saver::markdown_converter`], a synchronous HTML to
//! Markdown conversion tuned to the site's markup. The remaining modules
//! fetch pages, export results and drive batch runs.

pub mod config;
pub mod content_saver;
pub mod crawl_engine;
pub mod page_fetcher;
pub mod utils;

pub use config::FetcherConfig;
pub use content_saver::markdown_converter::{
    ConversionError, ConversionOptions, ConversionResult, ConvertResult, ResourceManifest,
    convert_challenge_sync,
};
pub use content_saver::{ExportStatus, save_json_data, save_markdown_content};
pub use crawl_engine::{ChallengeFetcher, ChallengeOutcome, RunSummary};
pub use page_fetcher::{FetchError, FetchedPage, HttpPageFetcher, PageFetcher};

/// Fetch and export every challenge of `config`
pub async fn fetch_challenges(config: &FetcherConfig) -> anyhow::Result<RunSummary> {
    ChallengeFetcher::run(config).await
}
