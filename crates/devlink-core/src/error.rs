//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures surfaced by the service layer.
///
/// Every operation returns exactly one of these on failure; the HTTP boundary
/// translates them to responses and never retries on the caller's behalf.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("a user with this email already exists")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("post already liked")]
    AlreadyLiked,

    #[error("post has not yet been liked")]
    NotLiked,

    #[error("requester does not own this resource")]
    Forbidden,

    #[error("storage failure during {step}: {source}")]
    Storage {
        step: &'static str,
        #[source]
        source: RepoError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Wrap a repository failure, recording which step of the operation hit it.
    pub fn storage(step: &'static str, source: RepoError) -> Self {
        Self::Storage { step, source }
    }
}

/// Repository-level errors, as raised by storage adapters.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("storage connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("record not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
