use artifact_sweeper_application::ports::AccessTokenProvider;
use artifact_sweeper_application::use_cases::CleanupExpiredArtifactsUseCase;
use artifact_sweeper_domain::{Config, RetentionPolicy};
use artifact_sweeper_infrastructure::{
    EnvTokenProvider, GitLabJobsClient, StaticTokenProvider, SystemClock,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Services {
    pub cleanup: Arc<CleanupExpiredArtifactsUseCase>,
    pub token_provider: Arc<dyn AccessTokenProvider>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_url = config.gitlab.api_url();
        let jobs_api = Arc::new(GitLabJobsClient::new(
            api_url.clone(),
            Duration::from_secs(config.gitlab.request_timeout_secs),
        )?);

        let cleanup = CleanupExpiredArtifactsUseCase::new(
            jobs_api,
            Arc::new(SystemClock::new()),
            RetentionPolicy::new(config.cleanup.retention_days),
        )
        .with_per_page(config.cleanup.per_page)
        .with_dry_run(config.cleanup.dry_run);

        let token_provider: Arc<dyn AccessTokenProvider> = match &config.gitlab.token {
            Some(token) => {
                info!("Using access token from configuration");
                Arc::new(StaticTokenProvider::new(token.clone()))
            }
            None => {
                let provider = EnvTokenProvider::new(config.gitlab.token_env.clone());
                info!(var = provider.var_name(), "Using access token from environment");
                Arc::new(provider)
            }
        };

        info!(api_url = %api_url, "GitLab client initialized");

        Ok(Self {
            cleanup: Arc::new(cleanup),
            token_provider,
        })
    }
}
