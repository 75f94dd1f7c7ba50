//! Generic entity CRUD service.
//!
//! One service instance binds exactly one entity type to one repository
//! collaborator. The service enforces argument and existence checks and
//! delegates everything else to the store; it holds no state of its own, so
//! any number of instances can be invoked concurrently.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::contract::{
    Chance, Country, Customer, EntityId, FundingProgram, PayCondition, ProjectStatus,
    PublicHoliday, Record, RepositoryError, Role, RoleRight, ServiceError, State, Subcontract,
    SystemModule,
};

use super::repository::{CrudRepository, PayConditionRepository, SubcontractRepository};

/// CRUD service over an entity type `E` and a repository capability set `R`.
///
/// `R` defaults to the plain CRUD contract; entities with extra finders
/// instantiate it with their specific repository trait instead.
pub struct CrudService<E: Record, R: ?Sized = dyn CrudRepository<E>> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Record, R: ?Sized> Clone for CrudService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _entity: PhantomData,
        }
    }
}

impl<E, R> CrudService<E, R>
where
    E: Record,
    R: CrudRepository<E> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Persist a new record.
    ///
    /// The record must not carry an id yet; the store assigns identity,
    /// version and timestamps. No field or uniqueness validation happens in
    /// this layer.
    pub async fn create(&self, record: E) -> Result<E, ServiceError> {
        if record.id().is_some() {
            return Err(ServiceError::InvalidArgument(
                "a new record must not carry an id",
            ));
        }
        let saved = self
            .repo
            .save(record)
            .await
            .map_err(ServiceError::Repository)?;
        debug!(entity = E::NAME, id = ?saved.id(), "record created");
        Ok(saved)
    }

    /// Look a record up by identifier. Absent records are `None`, never an
    /// error.
    pub async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, ServiceError> {
        require_positive(id)?;
        self.repo
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repository)
    }

    /// All records, in the order the bound repository defines for the
    /// entity. Empty when no records exist.
    pub async fn find_all(&self) -> Result<Vec<E>, ServiceError> {
        self.repo.find_all().await.map_err(ServiceError::Repository)
    }

    /// Fetch the record by id, copy the entity's mutable fields from
    /// `details` onto it and persist it again. Identity, version and audit
    /// fields are taken from the fetched record, never from `details`.
    ///
    /// A store-detected version conflict surfaces as
    /// [`ServiceError::Conflict`]; it is never retried here.
    pub async fn update(&self, id: EntityId, details: &E) -> Result<E, ServiceError> {
        require_positive(id)?;
        let mut existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repository)?
            .ok_or(ServiceError::NotFound {
                entity: E::NAME,
                id,
            })?;
        existing.apply_details(details);
        match self.repo.save(existing).await {
            Ok(saved) => Ok(saved),
            Err(err @ RepositoryError::Conflict { .. }) => {
                warn!(entity = E::NAME, id, "optimistic lock conflict on update");
                Err(ServiceError::Conflict(err))
            }
            Err(err) => Err(ServiceError::Repository(err)),
        }
    }

    /// Delete the record by id. Existence is checked first; deleting a
    /// missing record is a [`ServiceError::NotFound`] and the store delete
    /// is never invoked.
    pub async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        require_positive(id)?;
        let exists = self
            .repo
            .exists_by_id(id)
            .await
            .map_err(ServiceError::Repository)?;
        if !exists {
            return Err(ServiceError::NotFound {
                entity: E::NAME,
                id,
            });
        }
        self.repo
            .delete_by_id(id)
            .await
            .map_err(ServiceError::Repository)?;
        debug!(entity = E::NAME, id, "record deleted");
        Ok(())
    }
}

fn require_positive(id: EntityId) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::InvalidArgument("id must be positive"));
    }
    Ok(())
}

pub type ChanceService = CrudService<Chance>;
pub type CountryService = CrudService<Country>;
pub type CustomerService = CrudService<Customer>;
pub type FundingProgramService = CrudService<FundingProgram>;
pub type PayConditionService = CrudService<PayCondition, dyn PayConditionRepository>;
pub type ProjectStatusService = CrudService<ProjectStatus>;
pub type PublicHolidayService = CrudService<PublicHoliday>;
pub type RoleService = CrudService<Role>;
pub type RoleRightService = CrudService<RoleRight>;
pub type StateService = CrudService<State>;
pub type SubcontractService = CrudService<Subcontract, dyn SubcontractRepository>;
pub type SystemModuleService = CrudService<SystemModule>;

impl PayConditionService {
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<PayCondition>, ServiceError> {
        self.repo
            .find_by_name(name)
            .await
            .map_err(ServiceError::Repository)
    }

    pub async fn get_by_deadline(&self, deadline: i32) -> Result<Vec<PayCondition>, ServiceError> {
        self.repo
            .find_by_deadline(deadline)
            .await
            .map_err(ServiceError::Repository)
    }
}

impl SubcontractService {
    pub async fn find_by_contractor_id(
        &self,
        contractor_id: EntityId,
    ) -> Result<Vec<Subcontract>, ServiceError> {
        require_positive(contractor_id)?;
        self.repo
            .find_by_contractor_id(contractor_id)
            .await
            .map_err(ServiceError::Repository)
    }

    /// Subcontracts of a customer, ordered ascending by contract title.
    pub async fn find_by_customer_id(
        &self,
        customer_id: EntityId,
    ) -> Result<Vec<Subcontract>, ServiceError> {
        require_positive(customer_id)?;
        self.repo
            .find_by_customer_id(customer_id)
            .await
            .map_err(ServiceError::Repository)
    }

    pub async fn find_by_project_cost_center_id(
        &self,
        project_cost_center_id: EntityId,
    ) -> Result<Vec<Subcontract>, ServiceError> {
        require_positive(project_cost_center_id)?;
        self.repo
            .find_by_project_cost_center_id(project_cost_center_id)
            .await
            .map_err(ServiceError::Repository)
    }
}
