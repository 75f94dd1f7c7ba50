//! Common test utilities: in-memory mock repositories.
//!
//! The mocks mirror the store contract the services rely on: identity and
//! version assignment on insert, compare-and-swap version checks on update,
//! per-entity ordering in `find_all`. Call counters let tests assert that
//! a failed precondition never reaches the store.
#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering as AtomicOrdering};

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::RwLock;

use iws_services::domain::repository::{
    CrudRepository, PayConditionRepository, RepoResult, SubcontractRepository,
};
use iws_services::{EntityId, PayCondition, Record, RepositoryError, Subcontract};

/// In-memory stand-in for a persistence repository.
pub struct MockRepo<E: Record> {
    data: RwLock<HashMap<EntityId, E>>,
    next_id: AtomicI64,
    sort: Option<fn(&E, &E) -> Ordering>,
    fail_next_save: AtomicBool,
    pub save_calls: AtomicUsize,
    pub find_calls: AtomicUsize,
    pub exists_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl<E: Record> MockRepo<E> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            sort: None,
            fail_next_save: AtomicBool::new(false),
            save_calls: AtomicUsize::new(0),
            find_calls: AtomicUsize::new(0),
            exists_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// A repository whose `find_all` applies the entity's mandated order.
    pub fn with_order(sort: fn(&E, &E) -> Ordering) -> Self {
        Self {
            sort: Some(sort),
            ..Self::new()
        }
    }

    /// Put a record into the store directly, bypassing the service. Returns
    /// the stored copy with identity, version and timestamps assigned.
    pub fn seed(&self, mut record: E) -> E {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let now = chrono::Utc::now();
        let meta = record.meta_mut();
        meta.id = Some(id);
        meta.version = 1;
        meta.created_at = Some(now);
        meta.updated_at = Some(now);
        self.data.write().insert(id, record.clone());
        record
    }

    /// Make the next save fail with a version conflict, as the store does
    /// when another writer got in between fetch and save.
    pub fn fail_next_save_with_conflict(&self) {
        self.fail_next_save.store(true, AtomicOrdering::SeqCst);
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.data.read().contains_key(&id)
    }

    pub fn saved(&self) -> usize {
        self.save_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn deleted(&self) -> usize {
        self.delete_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn store_touched(&self) -> bool {
        self.saved() > 0
            || self.deleted() > 0
            || self.find_calls.load(AtomicOrdering::SeqCst) > 0
            || self.exists_calls.load(AtomicOrdering::SeqCst) > 0
    }
}

#[async_trait]
impl<E: Record> CrudRepository<E> for MockRepo<E> {
    async fn save(&self, mut record: E) -> RepoResult<E> {
        self.save_calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.fail_next_save.swap(false, AtomicOrdering::SeqCst) {
            return Err(RepositoryError::Conflict {
                entity: E::NAME,
                id: record.id().unwrap_or_default(),
                expected: record.meta().version,
            });
        }
        let now = chrono::Utc::now();
        match record.id() {
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
                let meta = record.meta_mut();
                meta.id = Some(id);
                meta.version = 1;
                meta.created_at = Some(now);
                meta.updated_at = Some(now);
                self.data.write().insert(id, record.clone());
                Ok(record)
            }
            Some(id) => {
                let mut data = self.data.write();
                let stored = data
                    .get(&id)
                    .ok_or_else(|| RepositoryError::Backend(anyhow!("no row with id {id}")))?;
                if stored.meta().version != record.meta().version {
                    return Err(RepositoryError::Conflict {
                        entity: E::NAME,
                        id,
                        expected: record.meta().version,
                    });
                }
                let meta = record.meta_mut();
                meta.version += 1;
                meta.updated_at = Some(now);
                data.insert(id, record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        self.find_calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<E>> {
        self.find_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let mut records: Vec<E> = self.data.read().values().cloned().collect();
        match self.sort {
            Some(cmp) => records.sort_by(cmp),
            // store default: primary key order
            None => records.sort_by_key(|r| r.id()),
        }
        Ok(records)
    }

    async fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
        self.exists_calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.data.read().contains_key(&id))
    }

    async fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.delete_calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.data.write().remove(&id);
        Ok(())
    }
}

/// Pay-condition mock: name-ordered `find_all` plus the name and deadline
/// finders.
pub struct MockPayConditionRepo {
    pub inner: MockRepo<PayCondition>,
}

impl MockPayConditionRepo {
    pub fn new() -> Self {
        Self {
            inner: MockRepo::with_order(|a, b| a.name.cmp(&b.name)),
        }
    }
}

impl Default for MockPayConditionRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository<PayCondition> for MockPayConditionRepo {
    async fn save(&self, record: PayCondition) -> RepoResult<PayCondition> {
        self.inner.save(record).await
    }

    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<PayCondition>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<PayCondition>> {
        self.inner.find_all().await
    }

    async fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.inner.delete_by_id(id).await
    }
}

#[async_trait]
impl PayConditionRepository for MockPayConditionRepo {
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<PayCondition>> {
        let mut records = self.inner.find_all().await?;
        records.retain(|r| r.name == name);
        Ok(records)
    }

    async fn find_by_deadline(&self, deadline: i32) -> RepoResult<Vec<PayCondition>> {
        let mut records = self.inner.find_all().await?;
        records.retain(|r| r.deadline == Some(deadline));
        Ok(records)
    }
}

/// Subcontract mock: title-ordered `find_all` plus the foreign-key finders.
pub struct MockSubcontractRepo {
    pub inner: MockRepo<Subcontract>,
}

impl MockSubcontractRepo {
    pub fn new() -> Self {
        Self {
            inner: MockRepo::with_order(|a, b| a.contract_title.cmp(&b.contract_title)),
        }
    }
}

impl Default for MockSubcontractRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository<Subcontract> for MockSubcontractRepo {
    async fn save(&self, record: Subcontract) -> RepoResult<Subcontract> {
        self.inner.save(record).await
    }

    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Subcontract>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Subcontract>> {
        self.inner.find_all().await
    }

    async fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
        self.inner.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.inner.delete_by_id(id).await
    }
}

#[async_trait]
impl SubcontractRepository for MockSubcontractRepo {
    async fn find_by_contractor_id(
        &self,
        contractor_id: EntityId,
    ) -> RepoResult<Vec<Subcontract>> {
        let mut records = self.inner.find_all().await?;
        records.retain(|r| r.contractor_id == Some(contractor_id));
        Ok(records)
    }

    async fn find_by_customer_id(&self, customer_id: EntityId) -> RepoResult<Vec<Subcontract>> {
        // find_all is already title-ordered
        let mut records = self.inner.find_all().await?;
        records.retain(|r| r.customer_id == Some(customer_id));
        Ok(records)
    }

    async fn find_by_project_cost_center_id(
        &self,
        project_cost_center_id: EntityId,
    ) -> RepoResult<Vec<Subcontract>> {
        let mut records = self.inner.find_all().await?;
        records.retain(|r| r.project_cost_center_id == Some(project_cost_center_id));
        Ok(records)
    }
}
