use artifact_sweeper_application::ports::AccessTokenProvider;
use artifact_sweeper_application::use_cases::CleanupExpiredArtifactsUseCase;
use artifact_sweeper_domain::{CleanupSummary, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 86400;

/// Sweeps the artifacts of every configured project, one project after the other.
///
/// `run_once` is a single pass. `start` repeats the pass on an interval until
/// the cancellation token fires; cancellation is observed between passes.
pub struct ArtifactRetentionJob {
    cleanup: Arc<CleanupExpiredArtifactsUseCase>,
    token_provider: Arc<dyn AccessTokenProvider>,
    projects: Vec<String>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ArtifactRetentionJob {
    pub fn new(
        cleanup: Arc<CleanupExpiredArtifactsUseCase>,
        token_provider: Arc<dyn AccessTokenProvider>,
        projects: Vec<String>,
    ) -> Self {
        Self {
            cleanup,
            token_provider,
            projects,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Fetches the token once and sweeps each project with it.
    pub async fn run_once(&self) -> Result<Vec<CleanupSummary>, DomainError> {
        let token = self.token_provider.access_token().await?;

        let mut summaries = Vec::with_capacity(self.projects.len());
        for project_id in &self.projects {
            summaries.push(self.cleanup.execute(&token, project_id).await);
        }

        Ok(summaries)
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            projects = self.projects.len(),
            retention_days = self.cleanup.policy().retention_days(),
            "Starting artifact retention job"
        );

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ArtifactRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.run_once().await {
                            Ok(summaries) => {
                                let incomplete =
                                    summaries.iter().filter(|s| !s.is_complete()).count();
                                let deleted: u64 =
                                    summaries.iter().map(|s| s.artifacts_deleted).sum();
                                info!(
                                    projects = summaries.len(),
                                    deleted,
                                    incomplete,
                                    "Artifact retention sweep completed"
                                );
                            }
                            Err(e) => {
                                error!(error = %e, "Artifact retention sweep failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
