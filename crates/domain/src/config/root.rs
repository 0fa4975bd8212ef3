use serde::{Deserialize, Serialize};

use super::cleanup::{CleanupConfig, MAX_PER_PAGE};
use super::errors::ConfigError;
use super::gitlab::GitLabConfig;
use super::logging::{LogFormat, LoggingConfig};

const LOCAL_CONFIG_PATH: &str = "artifact-sweeper.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/artifact-sweeper/config.toml";

/// Main configuration structure for Artifact Sweeper
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// GitLab API connection
    #[serde(default)]
    pub gitlab: GitLabConfig,

    /// What to sweep and how
    #[serde(default)]
    pub cleanup: CleanupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. artifact-sweeper.toml in current directory
    /// 3. /etc/artifact-sweeper/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.base_url {
            self.gitlab.base_url = url;
        }
        if let Some(token) = overrides.token {
            self.gitlab.token = Some(token);
        }
        if !overrides.projects.is_empty() {
            self.cleanup.projects = overrides.projects;
        }
        if let Some(days) = overrides.retention_days {
            self.cleanup.retention_days = days;
        }
        if let Some(per_page) = overrides.per_page {
            self.cleanup.per_page = per_page;
        }
        if overrides.dry_run {
            self.cleanup.dry_run = true;
        }
        if let Some(secs) = overrides.interval_secs {
            self.cleanup.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gitlab.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gitlab.base_url cannot be empty".to_string(),
            ));
        }

        if self.cleanup.projects.is_empty() {
            return Err(ConfigError::Validation(
                "No projects configured".to_string(),
            ));
        }

        if let Some(project) = self.cleanup.projects.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Invalid project id '{}'",
                project
            )));
        }

        if self.cleanup.per_page == 0 || self.cleanup.per_page > MAX_PER_PAGE {
            return Err(ConfigError::Validation(format!(
                "cleanup.per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.cleanup.per_page
            )));
        }

        if self.cleanup.retention_days == 0 {
            return Err(ConfigError::Validation(
                "cleanup.retention_days must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub projects: Vec<String>,
    pub retention_days: Option<u32>,
    pub per_page: Option<u32>,
    pub dry_run: bool,
    pub interval_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
