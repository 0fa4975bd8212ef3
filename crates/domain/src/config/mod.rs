pub mod cleanup;
pub mod errors;
pub mod gitlab;
pub mod logging;
pub mod root;

pub use cleanup::CleanupConfig;
pub use errors::ConfigError;
pub use gitlab::GitLabConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
