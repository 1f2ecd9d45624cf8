//! errors.rs - Custom error types for the tokenrx-core library.
//!
//! Every fallible operation in the library returns a [`TokenRxError`]. Rule
//! normalization is the only pipeline-fatal stage; problems with individual
//! token fields are treated as no-ops and never reach this type.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Coarse classification of a [`TokenRxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The resolved pattern source or its flags could not be compiled.
    InvalidPattern,
    /// The named-pattern lookup itself failed.
    ResolutionError,
    /// A rule file or pattern library was malformed.
    Configuration,
    /// Reading an input failed.
    Io,
    /// Anything else.
    Other,
}

/// This enum represents all possible error types in the `tokenrx-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TokenRxError {
    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid regular expression flags '{flags}': {reason}")]
    InvalidFlags { flags: String, reason: String },

    #[error("Failed to resolve named pattern '{name}': {reason}")]
    ResolutionError { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl TokenRxError {
    /// Returns the failure kind, so callers can branch without matching every variant.
    pub fn kind(&self) -> FailureKind {
        match self {
            TokenRxError::InvalidPattern { .. } | TokenRxError::InvalidFlags { .. } => {
                FailureKind::InvalidPattern
            }
            TokenRxError::ResolutionError { .. } => FailureKind::ResolutionError,
            TokenRxError::Configuration(_) => FailureKind::Configuration,
            TokenRxError::IoError(_) => FailureKind::Io,
            TokenRxError::AnyhowWrapper(_) => FailureKind::Other,
        }
    }
}
