use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;

use super::markdown_converter::ConversionResult;
use crate::utils::{JSON_NAME, challenge_dir};

/// Timeout for blocking JSON serialization
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// On-disk JSON record of a converted challenge
#[derive(Debug, Serialize)]
struct ChallengeRecord<'a> {
    number: u32,
    #[serde(flatten)]
    result: &'a ConversionResult,
}

/// Save the converted challenge as `<output_dir>/<padded number>/challenge.json`
///
/// Returns the path written.
pub async fn save_json_data(
    number: u32,
    result: &ConversionResult,
    output_dir: &Path,
) -> Result<PathBuf> {
    let dir = challenge_dir(output_dir, number);
    let path = dir.join(JSON_NAME);

    let data = serde_json::to_value(ChallengeRecord { number, result })?;

    // JSON serialization (spawn_blocking - bodies can be large)
    let blocking_task = tokio::task::spawn_blocking(move || serde_json::to_string_pretty(&data));

    let json_str = match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => return Err(anyhow::anyhow!("JSON serialization task panicked: {}", e)),
        Err(_) => {
            log::warn!("JSON serialization timeout (timeout: {:?})", BLOCKING_SERIALIZATION_TIMEOUT);
            return Err(anyhow::anyhow!(
                "JSON serialization timed out after {:?}",
                BLOCKING_SERIALIZATION_TIMEOUT
            ));
        }
    };

    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(&path, json_str).await?;

    log::debug!("Saved JSON for challenge {} to {}", number, path.display());

    Ok(path)
}
