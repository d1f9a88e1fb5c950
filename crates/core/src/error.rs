//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The core signals exactly one failure: a lookup that matched nothing.
/// Input-shape validation happens at the HTTP boundary before the domain
/// layer is reached and is never re-checked here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A lookup by identifier matched no record.
    #[error("not found")]
    NotFound,
}
