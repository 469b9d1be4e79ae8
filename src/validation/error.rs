//! Error types for the validation adapter.
//!
//! Data problems never surface here: they travel inside
//! [`ValidationResult::Failure`](super::domain::ValidationResult). These
//! types cover misuse of the API and broken validation machinery.

use thiserror::Error;

/// Errors returned by [`Validator::validate`](super::services::Validator::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// The schema exposes none of the supported capabilities.
    #[error("unsupported or invalid schema validator")]
    UnsupportedSchema,
}

/// Failures of the class-validation machinery itself.
///
/// The adapter folds these into a single `internal_error` detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineryError {
    /// The machinery could not be loaded.
    #[error("machinery unavailable: {0}")]
    Unavailable(String),

    /// Building an instance from plain input failed.
    #[error("instance transformation failed: {0}")]
    Transform(String),

    /// Constraint evaluation failed for reasons other than invalid data.
    #[error("constraint evaluation failed: {0}")]
    Evaluation(String),
}

impl MachineryError {
    /// Creates an unavailable-machinery error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Creates a transformation error.
    #[must_use]
    pub fn transform(reason: impl Into<String>) -> Self {
        Self::Transform(reason.into())
    }

    /// Creates an evaluation error.
    #[must_use]
    pub fn evaluation(reason: impl Into<String>) -> Self {
        Self::Evaluation(reason.into())
    }
}
