use thiserror::Error;

/// Errors reported by patch creation and the wire codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Either input document failed to parse. No partial output is produced.
    #[error("invalid JSON document")]
    InvalidJsonDocument,

    /// The ignored-fields pre-pass could not apply a selector.
    #[error("ignored field pre-pass failed: {0}")]
    IgnoredFieldPrePass(String),

    /// A wire-form operation could not be decoded.
    #[error("invalid patch operation: {0}")]
    InvalidOperation(String),
}
