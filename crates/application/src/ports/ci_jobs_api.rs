use async_trait::async_trait;
use artifact_sweeper_domain::{CiJob, DomainError};

/// Port for the remote CI job listing and artifact endpoints.
#[async_trait]
pub trait CiJobsApi: Send + Sync {
    /// One page of a project's jobs. An empty vector means the listing is exhausted.
    async fn list_jobs(
        &self,
        token: &str,
        project_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CiJob>, DomainError>;

    /// Release the artifact storage of a single job.
    async fn delete_job_artifacts(
        &self,
        token: &str,
        project_id: &str,
        job_id: u64,
    ) -> Result<(), DomainError>;
}
