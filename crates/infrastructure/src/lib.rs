//! Artifact Sweeper Infrastructure Layer
pub mod gitlab;
pub mod system;

pub use gitlab::GitLabJobsClient;
pub use system::{EnvTokenProvider, StaticTokenProvider, SystemClock};
