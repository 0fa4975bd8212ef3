#![allow(dead_code)]

use artifact_sweeper_application::ports::{AccessTokenProvider, CiJobsApi, Clock};
use artifact_sweeper_domain::ci_job::format_created_at;
use artifact_sweeper_domain::{CiJob, DomainError, JobArtifact};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
}

pub fn make_job(id: u64, age_days: i64, artifacts: usize) -> CiJob {
    CiJob::new(
        id,
        format_created_at(fixed_now() - Duration::days(age_days)),
        (0..artifacts)
            .map(|_| JobArtifact {
                file_type: Some("archive".to_string()),
                size: Some(2048),
                filename: Some("artifacts.zip".to_string()),
                file_format: Some("zip".to_string()),
            })
            .collect(),
    )
}

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// In-memory jobs API: pages are 1-based, anything past the last page is empty.
pub struct MockCiJobsApi {
    pages: Arc<RwLock<Vec<Vec<CiJob>>>>,
    fetched_pages: Arc<RwLock<Vec<u32>>>,
    deleted: Arc<RwLock<Vec<u64>>>,
    failing_deletes: Arc<RwLock<HashSet<u64>>>,
    failing_pages: Arc<RwLock<HashMap<u32, DomainError>>>,
    seen_tokens: Arc<RwLock<HashSet<String>>>,
    list_calls: Arc<AtomicU64>,
    delete_calls: Arc<AtomicU64>,
}

impl MockCiJobsApi {
    pub fn new() -> Self {
        Self::with_pages(Vec::new())
    }

    pub fn with_pages(pages: Vec<Vec<CiJob>>) -> Self {
        Self {
            pages: Arc::new(RwLock::new(pages)),
            fetched_pages: Arc::new(RwLock::new(Vec::new())),
            deleted: Arc::new(RwLock::new(Vec::new())),
            failing_deletes: Arc::new(RwLock::new(HashSet::new())),
            failing_pages: Arc::new(RwLock::new(HashMap::new())),
            seen_tokens: Arc::new(RwLock::new(HashSet::new())),
            list_calls: Arc::new(AtomicU64::new(0)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn fail_delete_for(&self, job_id: u64) {
        self.failing_deletes.write().await.insert(job_id);
    }

    pub async fn fail_page(&self, page: u32, error: DomainError) {
        self.failing_pages.write().await.insert(page, error);
    }

    pub async fn fetched_pages(&self) -> Vec<u32> {
        self.fetched_pages.read().await.clone()
    }

    pub async fn deleted(&self) -> Vec<u64> {
        self.deleted.read().await.clone()
    }

    pub async fn seen_tokens(&self) -> HashSet<String> {
        self.seen_tokens.read().await.clone()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CiJobsApi for MockCiJobsApi {
    async fn list_jobs(
        &self,
        token: &str,
        _project_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CiJob>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.fetched_pages.write().await.push(page);
        self.seen_tokens.write().await.insert(token.to_string());

        if let Some(err) = self.failing_pages.read().await.get(&page) {
            return Err(err.clone());
        }

        let pages = self.pages.read().await;
        let jobs = pages
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .unwrap_or_default();
        Ok(jobs.into_iter().take(per_page as usize).collect())
    }

    async fn delete_job_artifacts(
        &self,
        token: &str,
        project_id: &str,
        job_id: u64,
    ) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        self.seen_tokens.write().await.insert(token.to_string());

        if self.failing_deletes.read().await.contains(&job_id) {
            return Err(DomainError::HttpStatus {
                status: 500,
                url: format!("/projects/{}/jobs/{}/artifacts", project_id, job_id),
            });
        }

        self.deleted.write().await.push(job_id);
        Ok(())
    }
}

pub struct MockTokenProvider {
    token: Option<String>,
    call_count: Arc<AtomicU64>,
}

impl MockTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn missing() -> Self {
        Self {
            token: None,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AccessTokenProvider for MockTokenProvider {
    async fn access_token(&self) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.token
            .clone()
            .ok_or_else(|| DomainError::MissingCredential("no token configured".to_string()))
    }
}
