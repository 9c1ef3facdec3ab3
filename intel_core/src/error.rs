//! Error types for intel processing.

use commander_rules::RulesError;
use thiserror::Error;

/// Errors that can occur while ingesting situations or loading configuration.
#[derive(Debug, Error)]
pub enum IntelError {
    /// A situation arrived without the one field every decision depends on.
    #[error("situation has no timestamp")]
    MissingTimestamp,

    #[error("invalid situation timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("malformed situation: {0}")]
    MalformedSituation(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),

    /// A config value that parses but cannot be used, e.g. a negative age.
    #[error("invalid config value for {key}: {value}")]
    InvalidConfig { key: String, value: i64 },

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Result type for intel operations.
pub type IntelResult<T> = Result<T, IntelError>;
