//! Repository traits for data access.
//!
//! These traits define the interface for the persistence collaborators.
//! Implementations are in infra/storage/repositories.rs; tests bind the
//! services to in-memory mocks instead.

use async_trait::async_trait;

use crate::contract::{EntityId, PayCondition, Record, RepositoryError, Subcontract};

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Persistence capability set every entity service relies on. One bound
/// instance per service.
#[async_trait]
pub trait CrudRepository<E: Record>: Send + Sync {
    /// Persist the record: insert when it carries no id, version-checked
    /// update when it does. A stale version yields
    /// [`RepositoryError::Conflict`].
    async fn save(&self, record: E) -> RepoResult<E>;

    /// Look the record up by identifier.
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>>;

    /// All records, in the order defined for the entity (some entities
    /// mandate a sort key, the rest use the store default).
    async fn find_all(&self) -> RepoResult<Vec<E>>;

    async fn exists_by_id(&self, id: EntityId) -> RepoResult<bool>;

    async fn delete_by_id(&self, id: EntityId) -> RepoResult<()>;
}

/// Payment-condition finders on top of the CRUD capability set.
#[async_trait]
pub trait PayConditionRepository: CrudRepository<PayCondition> {
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<PayCondition>>;

    async fn find_by_deadline(&self, deadline: i32) -> RepoResult<Vec<PayCondition>>;
}

/// Subcontract finders on top of the CRUD capability set.
#[async_trait]
pub trait SubcontractRepository: CrudRepository<Subcontract> {
    async fn find_by_contractor_id(&self, contractor_id: EntityId)
        -> RepoResult<Vec<Subcontract>>;

    /// Ordered ascending by contract title.
    async fn find_by_customer_id(&self, customer_id: EntityId) -> RepoResult<Vec<Subcontract>>;

    async fn find_by_project_cost_center_id(
        &self,
        project_cost_center_id: EntityId,
    ) -> RepoResult<Vec<Subcontract>>;
}
