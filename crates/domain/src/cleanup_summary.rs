use crate::DomainError;

/// Per-project result of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub project_id: String,
    pub pages_processed: u32,
    pub jobs_evaluated: u64,
    pub jobs_eligible: u64,
    pub artifacts_deleted: u64,
    pub deletions_failed: u64,
    /// Jobs whose `created_at` could not be parsed.
    pub jobs_skipped: u64,
    pub dry_run: bool,
    /// Set when a page could not be fetched or decoded and the sweep stopped early.
    pub halted_by: Option<DomainError>,
}

impl CleanupSummary {
    pub fn new(project_id: impl Into<String>, dry_run: bool) -> Self {
        Self {
            project_id: project_id.into(),
            dry_run,
            ..Self::default()
        }
    }

    /// True when every page was read and every attempted deletion succeeded.
    pub fn is_complete(&self) -> bool {
        self.halted_by.is_none() && self.deletions_failed == 0
    }
}
