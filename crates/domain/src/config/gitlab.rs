use serde::{Deserialize, Serialize};

/// Connection settings for the GitLab REST API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabConfig {
    /// Instance root, e.g. `https://gitlab.example.com`. `/api/v4` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Environment variable holding the private token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Inline token. Prefer `token_env`; when both are set this one wins.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl GitLabConfig {
    pub fn api_url(&self) -> String {
        format!("{}/api/v4", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            token_env: default_token_env(),
            token: None,
        }
    }
}

fn default_base_url() -> String {
    "https://gitlab.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_token_env() -> String {
    "GITLAB_TOKEN".to_string()
}
