use artifact_sweeper_domain::CleanupSummary;
use tracing::{info, warn};

/// Logs the outcome of a pass and returns whether every project was swept completely.
pub fn report_summaries(summaries: &[CleanupSummary]) -> bool {
    let mut all_complete = true;

    for summary in summaries {
        if let Some(halt) = &summary.halted_by {
            warn!(
                project_id = %summary.project_id,
                error = %halt,
                "Sweep stopped before the end of the job listing"
            );
        }
        all_complete &= summary.is_complete();
    }

    let deleted: u64 = summaries.iter().map(|s| s.artifacts_deleted).sum();
    let eligible: u64 = summaries.iter().map(|s| s.jobs_eligible).sum();
    let delete_failures: u64 = summaries.iter().map(|s| s.deletions_failed).sum();

    info!(
        projects = summaries.len(),
        eligible,
        deleted,
        delete_failures,
        "Artifact sweep finished"
    );

    all_complete
}
