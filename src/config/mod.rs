//! Configuration module for challenge fetching
//!
//! This module provides the `FetcherConfig` struct and its type-safe builder
//! for configuring a fetch run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{FetcherConfigBuilder, WithChallengeRange, WithOutputDir};
pub use types::FetcherConfig;
