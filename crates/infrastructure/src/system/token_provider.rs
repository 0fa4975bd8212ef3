use artifact_sweeper_application::ports::AccessTokenProvider;
use artifact_sweeper_domain::DomainError;
use async_trait::async_trait;
use tracing::debug;

/// Token handed over at construction time (config file or `--token`).
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, DomainError> {
        if self.token.is_empty() {
            return Err(DomainError::MissingCredential(
                "configured token is empty".to_string(),
            ));
        }
        Ok(self.token.clone())
    }
}

/// Reads the token from an environment variable on every call.
pub struct EnvTokenProvider {
    var_name: String,
}

impl EnvTokenProvider {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> Result<String, DomainError> {
        match std::env::var(&self.var_name) {
            Ok(token) if !token.trim().is_empty() => {
                debug!(var = %self.var_name, "Loaded access token from environment");
                Ok(token.trim().to_string())
            }
            Ok(_) => Err(DomainError::MissingCredential(format!(
                "environment variable {} is empty",
                self.var_name
            ))),
            Err(_) => Err(DomainError::MissingCredential(format!(
                "environment variable {} is not set",
                self.var_name
            ))),
        }
    }
}
