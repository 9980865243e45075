//! Batch runner
//!
//! Fetches, converts and exports a range of challenges with bounded
//! concurrency, recording one [`ChallengeOutcome`] per challenge.

// Sub-modules
pub mod crawl_types;
pub mod orchestrator;
pub mod page_processor;

// Re-exports for public API
pub use crawl_types::{ChallengeOutcome, RunSummary};
pub use orchestrator::ChallengeFetcher;
