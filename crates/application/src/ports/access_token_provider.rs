use async_trait::async_trait;
use artifact_sweeper_domain::DomainError;

/// Supplies the API credential used for every request of a run.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, DomainError>;
}
