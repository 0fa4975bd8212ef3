use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid job timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// True for failures that happened before or while talking to the remote API,
    /// as opposed to a response that arrived but could not be understood.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }
}
