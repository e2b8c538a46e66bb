//! CLI error types.

use fx_feed::error::{ConfigError, FeedError};
use thiserror::Error;

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Pair id not in the catalog
    #[error("Unknown pair: {0}")]
    UnknownPair(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Feed error
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::UnknownPair("XYZ".to_string()).to_string(),
            "Unknown pair: XYZ"
        );
        let err: CliError = FeedError::NotConnected.into();
        assert_eq!(err.to_string(), "Feed error: Channel is not connected");
    }
}
