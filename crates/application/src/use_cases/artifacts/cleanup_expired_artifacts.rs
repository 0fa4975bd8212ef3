use crate::ports::{CiJobsApi, Clock};
use artifact_sweeper_domain::{
    CiJob, CleanupSummary, DomainError, RetentionDecision, RetentionPolicy,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const DEFAULT_PER_PAGE: u32 = 50;

/// Use case: walk a project's job history page by page and delete the
/// artifacts of every job older than the retention threshold.
///
/// Requests are strictly sequential. A failed deletion is logged and counted
/// but does not stop the sweep; a page that cannot be fetched or decoded ends
/// the sweep for that project and is recorded in the summary.
pub struct CleanupExpiredArtifactsUseCase {
    jobs_api: Arc<dyn CiJobsApi>,
    clock: Arc<dyn Clock>,
    policy: RetentionPolicy,
    per_page: u32,
    dry_run: bool,
}

impl CleanupExpiredArtifactsUseCase {
    pub fn new(
        jobs_api: Arc<dyn CiJobsApi>,
        clock: Arc<dyn Clock>,
        policy: RetentionPolicy,
    ) -> Self {
        Self {
            jobs_api,
            clock,
            policy,
            per_page: DEFAULT_PER_PAGE,
            dry_run: false,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    pub async fn fetch_jobs_page(
        &self,
        token: &str,
        project_id: &str,
        page: u32,
    ) -> Result<Vec<CiJob>, DomainError> {
        self.jobs_api
            .list_jobs(token, project_id, page, self.per_page)
            .await
    }

    pub async fn has_jobs(
        &self,
        token: &str,
        project_id: &str,
        page: u32,
    ) -> Result<bool, DomainError> {
        Ok(!self.fetch_jobs_page(token, project_id, page).await?.is_empty())
    }

    pub async fn delete_artifacts(
        &self,
        token: &str,
        project_id: &str,
        job_id: u64,
    ) -> Result<(), DomainError> {
        self.jobs_api
            .delete_job_artifacts(token, project_id, job_id)
            .await
    }

    pub async fn execute(&self, token: &str, project_id: &str) -> CleanupSummary {
        info!(
            project_id,
            retention_days = self.policy.retention_days(),
            per_page = self.per_page,
            dry_run = self.dry_run,
            "Start cleaning project"
        );

        let mut summary = CleanupSummary::new(project_id, self.dry_run);
        let mut page = 1u32;

        loop {
            let jobs = match self.fetch_jobs_page(token, project_id, page).await {
                Ok(jobs) => jobs,
                Err(e) => {
                    error!(
                        project_id,
                        page,
                        transport = e.is_transport(),
                        error = %e,
                        "Failed to fetch jobs page"
                    );
                    summary.halted_by = Some(e);
                    break;
                }
            };

            if jobs.is_empty() {
                debug!(project_id, page, "Reached end of job listing");
                break;
            }

            let now = self.clock.now();
            for job in &jobs {
                self.sweep_job(token, project_id, job, now, &mut summary)
                    .await;
            }

            summary.pages_processed += 1;
            page += 1;
        }

        if summary.is_complete() {
            info!(
                project_id,
                pages = summary.pages_processed,
                evaluated = summary.jobs_evaluated,
                eligible = summary.jobs_eligible,
                deleted = summary.artifacts_deleted,
                skipped = summary.jobs_skipped,
                "Finished cleaning project"
            );
        } else {
            warn!(
                project_id,
                pages = summary.pages_processed,
                evaluated = summary.jobs_evaluated,
                eligible = summary.jobs_eligible,
                deleted = summary.artifacts_deleted,
                failed = summary.deletions_failed,
                skipped = summary.jobs_skipped,
                halted = summary.halted_by.is_some(),
                "Finished cleaning project with errors"
            );
        }

        summary
    }

    async fn sweep_job(
        &self,
        token: &str,
        project_id: &str,
        job: &CiJob,
        now: DateTime<Utc>,
        summary: &mut CleanupSummary,
    ) {
        summary.jobs_evaluated += 1;

        let age_days = match self.policy.evaluate(job, now) {
            Ok(RetentionDecision::Expired { age_days }) => age_days,
            Ok(_) => return,
            Err(e) => {
                warn!(
                    project_id,
                    job_id = job.id,
                    error = %e,
                    "Skipping job with unreadable timestamp"
                );
                summary.jobs_skipped += 1;
                return;
            }
        };

        summary.jobs_eligible += 1;

        if self.dry_run {
            info!(
                project_id,
                job_id = job.id,
                age_days,
                artifacts = job.artifacts.len(),
                "Dry run: would remove job artifacts"
            );
            return;
        }

        match self.delete_artifacts(token, project_id, job.id).await {
            Ok(()) => {
                debug!(project_id, job_id = job.id, age_days, "Removed job artifacts");
                summary.artifacts_deleted += 1;
            }
            Err(e) => {
                error!(
                    project_id,
                    job_id = job.id,
                    error = %e,
                    "Failed to remove job artifacts"
                );
                summary.deletions_failed += 1;
            }
        }
    }
}
