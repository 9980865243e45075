use anyhow::{Context, Result};
use std::path::Path;

use super::export_status::ExportStatus;
use super::markdown_converter::ConversionResult;
use crate::utils::{README_NAME, challenge_dir};

/// Render the README for a converted challenge
///
/// ```text
/// # <title>
///
/// <source url>
///
/// <markdown body>
/// ```
#[must_use]
pub fn format_readme(result: &ConversionResult) -> String {
    format!(
        "# {}\n\n{}\n\n{}\n",
        result.title, result.source_url, result.markdown_body
    )
}

/// Save a converted challenge as `<output_dir>/<padded number>/README.md`
///
/// # Arguments
///
/// * `number` - Challenge number, used for the folder name
/// * `result` - The converted challenge
/// * `output_dir` - Base directory holding one folder per challenge
/// * `overwrite` - Replace an existing README instead of skipping
///
/// # Returns
///
/// * `Result<ExportStatus>` - Status of the export; `Err` only for I/O failures
pub async fn save_markdown_content(
    number: u32,
    result: &ConversionResult,
    output_dir: &Path,
    overwrite: bool,
) -> Result<ExportStatus> {
    let dir = challenge_dir(output_dir, number);

    if is_file(output_dir).await? || is_file(&dir).await? {
        return Ok(ExportStatus::OutputDirIsFile);
    }

    let path = dir.join(README_NAME);
    if !overwrite
        && tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check {}", path.display()))?
    {
        log::debug!("Skipping existing {}", path.display());
        return Ok(ExportStatus::AlreadyExists);
    }

    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    tokio::fs::write(&path, format_readme(result))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Saved markdown for {} to {}", result.source_url, path.display());

    Ok(ExportStatus::Ok)
}

async fn is_file(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to inspect {}", path.display())),
    }
}
