use crate::{CiJob, DomainError};
use chrono::{DateTime, Utc};

pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Outcome of evaluating one job against the retention policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionDecision {
    /// Old enough and still holding artifacts.
    Expired { age_days: i64 },
    /// Younger than the threshold.
    Retained { age_days: i64 },
    /// Old enough, but nothing left to delete.
    NoArtifacts { age_days: i64 },
}

impl RetentionDecision {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    retention_days: u32,
}

impl RetentionPolicy {
    pub fn new(retention_days: u32) -> Self {
        Self { retention_days }
    }

    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    pub fn evaluate(
        &self,
        job: &CiJob,
        now: DateTime<Utc>,
    ) -> Result<RetentionDecision, DomainError> {
        let age_days = job.age_in_days(now)?;

        if age_days < i64::from(self.retention_days) {
            Ok(RetentionDecision::Retained { age_days })
        } else if !job.has_artifacts() {
            Ok(RetentionDecision::NoArtifacts { age_days })
        } else {
            Ok(RetentionDecision::Expired { age_days })
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS)
    }
}
