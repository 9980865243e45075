//! Challenge conversion and export
//!
//! `markdown_converter` turns a challenge page into Markdown; the remaining
//! modules write the result into the challenge's folder.

// Module declarations
mod export_status;
mod json_saver;
pub mod markdown_converter;
mod markdown_saver;
pub mod resource_downloader;

// Re-export public API from export_status module
pub use export_status::ExportStatus;

// Re-export public API from json_saver module
pub use json_saver::save_json_data;

// Re-export public API from markdown_saver module
pub use markdown_saver::{format_readme, save_markdown_content};

// Re-export public API from resource_downloader module
pub use resource_downloader::{DownloadConfig, DownloadFailure, DownloadReport, download_resources};
