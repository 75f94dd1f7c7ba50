//! Contract error types for the service layer.
//!
//! All failures are raised immediately to the caller; this layer never
//! retries, suppresses or partially succeeds.

use thiserror::Error;

use super::model::EntityId;

/// Failure surfaced by a repository collaborator.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The record's version at write time did not match the version read at
    /// fetch time, indicating concurrent modification.
    #[error("version conflict on {entity} with id {id}: version {expected} is stale")]
    Conflict {
        entity: &'static str,
        id: EntityId,
        expected: i64,
    },

    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Errors raised by the entity CRUD services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required input failed the argument checks; the store was never
    /// invoked.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The referenced record does not exist at update or delete time.
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// The store rejected an update because the record was modified since it
    /// was fetched. The repository failure is preserved as the source.
    #[error("concurrent modification detected")]
    Conflict(#[source] RepositoryError),

    /// Any other repository failure, propagated as-is.
    #[error("repository failure")]
    Repository(#[source] RepositoryError),
}
