//! GitLab REST API v4 adapter for the job listing and artifact endpoints.
//!
//! ```text
//! GET    {api}/projects/{id}/jobs?page={n}&per_page={size}
//! DELETE {api}/projects/{id}/jobs/{job_id}/artifacts
//! ```
//!
//! See https://docs.gitlab.com/ee/api/jobs.html#list-project-jobs and
//! https://docs.gitlab.com/ee/api/job_artifacts.html#delete-job-artifacts

use super::headers::build_headers;
use artifact_sweeper_application::ports::CiJobsApi;
use artifact_sweeper_domain::{CiJob, DomainError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub struct GitLabJobsClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitLabJobsClient {
    /// `api_url` is the versioned API root, e.g. `https://gitlab.example.com/api/v4`.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(api_url, client))
    }

    pub fn with_client(api_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn jobs_url(&self, project_id: &str) -> String {
        format!("{}/projects/{}/jobs", self.api_url, project_id)
    }

    fn artifacts_url(&self, project_id: &str, job_id: u64) -> String {
        format!(
            "{}/projects/{}/jobs/{}/artifacts",
            self.api_url, project_id, job_id
        )
    }
}

#[async_trait]
impl CiJobsApi for GitLabJobsClient {
    async fn list_jobs(
        &self,
        token: &str,
        project_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CiJob>, DomainError> {
        let url = self.jobs_url(project_id);
        debug!(url = %url, page, per_page, "Listing project jobs");

        let response = self
            .client
            .get(&url)
            .headers(build_headers(None, Some(token))?)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("read error for {}: {}", url, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| DomainError::Decode(format!("job listing from {}: {}", url, e)))
    }

    async fn delete_job_artifacts(
        &self,
        token: &str,
        project_id: &str,
        job_id: u64,
    ) -> Result<(), DomainError> {
        let url = self.artifacts_url(project_id, job_id);
        debug!(url = %url, job_id, "Deleting job artifacts");

        let response = self
            .client
            .delete(&url)
            .headers(build_headers(None, Some(token))?)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("DELETE {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(())
    }
}
