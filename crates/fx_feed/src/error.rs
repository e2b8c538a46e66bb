//! Error types for the rate feed.

use thiserror::Error;

/// Failure to read, parse or validate a [`FeedConfig`](crate::config::FeedConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Cannot read config: {0}")]
    Io(String),

    /// The file is not valid TOML for the config shape
    #[error("Cannot parse config: {0}")]
    Parse(String),

    /// One entry per violated rule
    #[error("Invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Channel and store failures.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Subscribe attempted on a channel that is not connected
    #[error("Channel is not connected")]
    NotConnected,

    /// Periodic delivery needs a tokio runtime
    #[error("No tokio runtime available to drive the tick timer")]
    NoRuntime,

    /// A zero tick interval cannot drive periodic delivery
    #[error("Tick interval must be greater than zero")]
    ZeroTickInterval,

    /// Settings were rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}
