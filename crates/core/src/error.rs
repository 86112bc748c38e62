//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers the two ways constructing a domain object can fail: an identifier
/// that does not parse, and an entity whose invariants do not hold. Both are
/// terminal for the construction attempt; no partially-built object survives
/// them. Backend failures (storage, transport) are not represented here —
/// repository implementations carry their own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier could not be parsed from its textual form.
    #[error("invalid identifier format: {0}")]
    InvalidFormat(String),

    /// An entity's state validation found a violated invariant.
    #[error("invalid entity state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
