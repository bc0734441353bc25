//! Error types for configuration loading.

use crate::AgentCategory;
use thiserror::Error;

/// Errors that make a configuration unusable. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid RON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// A table that the analysis cannot work without is empty.
    #[error("table `{0}` must not be empty")]
    EmptyTable(&'static str),

    /// The passive-subject relation must itself mark subjects.
    #[error("passive subject relation {0:?} is not among the subject relations")]
    PassiveSubjectNotSubject(String),

    /// One lemma normalizes to two different agent categories.
    #[error("agent lemma {lemma:?} is listed as both {first} and {second}")]
    ConflictingAgent {
        lemma: String,
        first: AgentCategory,
        second: AgentCategory,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
