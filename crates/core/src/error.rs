//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised when a component is used before a dependency it reads has been
/// assigned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A dependency was read before anything assigned it.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),
}

impl DomainError {
    pub fn missing(dependency: &'static str) -> Self {
        Self::MissingDependency(dependency)
    }
}
