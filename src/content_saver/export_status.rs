//! Outcome of writing a challenge README.

use serde::{Deserialize, Serialize};

use crate::utils::README_NAME;

/// Status of one Markdown export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStatus {
    /// README.md written
    Ok,
    /// README.md already present and overwriting is disabled
    AlreadyExists,
    /// The output or challenge folder path is an existing file
    OutputDirIsFile,
}

impl ExportStatus {
    /// One-line human readable status
    #[must_use]
    pub fn message(self) -> String {
        match self {
            ExportStatus::Ok => "OK!".to_string(),
            ExportStatus::AlreadyExists => format!("{README_NAME} already exists... Skipping!"),
            ExportStatus::OutputDirIsFile => {
                "Error! The specified output directory is a file.".to_string()
            }
        }
    }

    /// Whether the export counts as a failure of the run
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, ExportStatus::OutputDirIsFile)
    }
}

impl std::fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
