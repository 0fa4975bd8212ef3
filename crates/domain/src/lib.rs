//! Artifact Sweeper Domain Layer
pub mod ci_job;
pub mod cleanup_summary;
pub mod config;
pub mod errors;
pub mod retention;

pub use ci_job::{CiJob, JobArtifact};
pub use cleanup_summary::CleanupSummary;
pub use config::{
    CleanupConfig, CliOverrides, Config, ConfigError, GitLabConfig, LogFormat, LoggingConfig,
};
pub use errors::DomainError;
pub use retention::{RetentionDecision, RetentionPolicy};
