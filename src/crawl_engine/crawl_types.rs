//! Outcome types for a batch run.

use std::fmt;

use crate::content_saver::markdown_converter::ConversionError;
use crate::content_saver::{DownloadReport, ExportStatus};

/// What happened to one challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// The README step ran; `status` says whether it was written
    Exported {
        number: u32,
        status: ExportStatus,
        /// Present when resources were downloaded
        resources: Option<DownloadReport>,
    },
    /// No usable page was received
    FetchFailed { number: u32, reason: String },
    /// The page was received but could not be converted
    ConversionFailed { number: u32, error: ConversionError },
    /// Writing the export failed, or the conversion task died
    Aborted { number: u32, reason: String },
}

impl ChallengeOutcome {
    #[must_use]
    pub fn number(&self) -> u32 {
        match self {
            Self::Exported { number, .. }
            | Self::FetchFailed { number, .. }
            | Self::ConversionFailed { number, .. }
            | Self::Aborted { number, .. } => *number,
        }
    }

    /// Whether this challenge makes the run unsuccessful
    ///
    /// A skipped existing README and failed resource downloads do not.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Exported { status, .. } => status.is_error(),
            Self::FetchFailed { .. } | Self::ConversionFailed { .. } | Self::Aborted { .. } => true,
        }
    }
}

impl fmt::Display for ChallengeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exported {
                number,
                status,
                resources,
            } => {
                write!(f, "Challenge {number}: {status}")?;
                if let Some(report) = resources.as_ref().filter(|r| r.has_failures()) {
                    write!(
                        f,
                        " ({} of {} resources failed to download)",
                        report.failures.len(),
                        report.total()
                    )?;
                }
                Ok(())
            }
            Self::FetchFailed { number, reason } => {
                write!(f, "Challenge {number}: Error! Could not fetch the page: {reason}")
            }
            Self::ConversionFailed { number, error } => {
                write!(f, "Challenge {number}: Error! Could not convert the page: {error}")
            }
            Self::Aborted { number, reason } => write!(f, "Challenge {number}: Error! {reason}"),
        }
    }
}

/// Outcomes of a batch run, sorted by challenge number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<ChallengeOutcome>,
}

impl RunSummary {
    /// Sort `outcomes` by challenge number
    #[must_use]
    pub fn new(mut outcomes: Vec<ChallengeOutcome>) -> Self {
        outcomes.sort_by_key(ChallengeOutcome::number);
        Self { outcomes }
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(ChallengeOutcome::is_failure)
    }

    /// Challenges whose README was written by this run
    #[must_use]
    pub fn exported(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o,
                    ChallengeOutcome::Exported {
                        status: ExportStatus::Ok,
                        ..
                    }
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sorts_and_counts() {
        let summary = RunSummary::new(vec![
            ChallengeOutcome::FetchFailed {
                number: 3,
                reason: "HTTP 404".to_string(),
            },
            ChallengeOutcome::Exported {
                number: 1,
                status: ExportStatus::Ok,
                resources: None,
            },
            ChallengeOutcome::Exported {
                number: 2,
                status: ExportStatus::AlreadyExists,
                resources: None,
            },
        ]);

        let numbers: Vec<u32> = summary.outcomes.iter().map(ChallengeOutcome::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(summary.exported(), 1);
        assert_eq!(summary.failures(), 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_status_lines() {
        let ok = ChallengeOutcome::Exported {
            number: 1,
            status: ExportStatus::Ok,
            resources: None,
        };
        assert_eq!(ok.to_string(), "Challenge 1: OK!");

        let failed = ChallengeOutcome::ConversionFailed {
            number: 5,
            error: ConversionError::UnknownLinkType {
                url: "news".to_string(),
            },
        };
        assert_eq!(
            failed.to_string(),
            "Challenge 5: Error! Could not convert the page: A URL was found to an unknown resource type: news"
        );
    }
}
