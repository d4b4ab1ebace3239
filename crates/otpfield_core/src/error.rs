//! Error types

use thiserror::Error;

/// Failure reported by a fallible validator.
///
/// The engine never propagates this to the caller: it is routed to the
/// monitoring sink and resolved internally as "invalid".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The validator itself failed (backend unreachable, timeout upstream, ...)
    #[error("validator failed: {0}")]
    Failed(String),
}

impl ValidationError {
    /// Convenience constructor for ad-hoc validator failures
    pub fn failed(message: impl Into<String>) -> Self {
        ValidationError::Failed(message.into())
    }
}
