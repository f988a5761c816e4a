//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error: deterministic business failures only.
///
/// Malformed persisted fields never show up here; the store repairs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (blank zone, unordered thresholds, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record would break the empty-slot invariant.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A stocktake command is not allowed in the location's current state
    /// (verify on verified, edit on pending). State is left unchanged.
    #[error("invalid transition for {location_id}: {reason}")]
    InvalidTransition { location_id: String, reason: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_transition(location_id: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            location_id: location_id.to_string(),
            reason: reason.into(),
        }
    }
}
