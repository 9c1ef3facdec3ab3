//! Error types for commander state transitions and rule tables.

use thiserror::Error;

/// Errors raised by the commander rules.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A wing operation was attempted while the commander sits in a multi-member crew.
    #[error("wing and crew are exclusive: commander is in a crew of {crew_size}")]
    WingCrewConflict { crew_size: usize },

    /// `resurrect` called on a commander that was never destroyed.
    #[error("commander {0} is not destroyed")]
    NotDestroyed(String),

    /// A journal timestamp could not be parsed.
    #[error("invalid journal timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// The vehicle alias table is not valid TOML.
    #[error("malformed vehicle alias table: {0}")]
    AliasTable(#[from] toml::de::Error),
}

/// Result type for commander rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
