use crate::retention::DEFAULT_RETENTION_DAYS;
use serde::{Deserialize, Serialize};

/// Largest page size the jobs API accepts.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Project ids (or URL-encoded paths) to sweep, in order.
    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Count and log eligible jobs without deleting anything.
    #[serde(default)]
    pub dry_run: bool,

    /// Seconds between sweeps. 0 runs a single sweep and exits.
    #[serde(default)]
    pub interval_secs: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            retention_days: default_retention_days(),
            per_page: default_per_page(),
            dry_run: false,
            interval_secs: 0,
        }
    }
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

fn default_per_page() -> u32 {
    50
}
