use crate::DomainError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Layout of `created_at` as returned by the jobs API, e.g. `2024-03-01T10:15:30.123456Z`.
/// The fractional part is optional when parsing.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// A stored output attached to a CI job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobArtifact {
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_format: Option<String>,
}

/// One entry of a project's job listing.
///
/// `created_at` is kept as received so a single malformed record does not
/// fail decoding of the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CiJob {
    pub id: u64,
    pub created_at: String,
    #[serde(default)]
    pub artifacts: Vec<JobArtifact>,
}

impl CiJob {
    pub fn new(id: u64, created_at: impl Into<String>, artifacts: Vec<JobArtifact>) -> Self {
        Self {
            id,
            created_at: created_at.into(),
            artifacts,
        }
    }

    pub fn has_artifacts(&self) -> bool {
        !self.artifacts.is_empty()
    }

    pub fn created_at_utc(&self) -> Result<DateTime<Utc>, DomainError> {
        NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| {
                DomainError::InvalidTimestamp(format!(
                    "job {} has created_at {:?}: {}",
                    self.id, self.created_at, e
                ))
            })
    }

    /// Whole days elapsed between creation and `now`. Fractional days are truncated.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> Result<i64, DomainError> {
        Ok((now - self.created_at_utc()?).num_days())
    }
}

/// Formats a timestamp the way the jobs API does.
pub fn format_created_at(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
