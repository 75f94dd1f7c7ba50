//! SeaORM repository implementations.
//!
//! The CRUD capability set is identical across entities, so it is stamped
//! out by a macro; only the entity module, the mappers and the mandated
//! `find_all` ordering vary. Entity-specific finders are implemented by
//! hand below.
//!
//! Optimistic locking: updates are a compare-and-swap on the version
//! column. Zero affected rows means another writer got there first and the
//! save fails with a conflict.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::contract::{
    Chance, Country, Customer, EntityId, FundingProgram, PayCondition, ProjectStatus,
    PublicHoliday, Record, RepositoryError, Role, RoleRight, State, Subcontract, SystemModule,
};
use crate::domain::repository::{
    CrudRepository, PayConditionRepository, RepoResult, SubcontractRepository,
};

use super::{entity, mapper};

fn backend(err: sea_orm::DbErr) -> RepositoryError {
    RepositoryError::Backend(anyhow::Error::new(err))
}

macro_rules! crud_repository {
    ($repo:ident, $domain:ty, $module:ident,
     insert = $insert:path, update = $update:path
     $(, order_by = $order:expr)?) => {
        pub struct $repo {
            db: Arc<DatabaseConnection>,
        }

        impl $repo {
            pub fn new(db: Arc<DatabaseConnection>) -> Self {
                Self { db }
            }
        }

        #[async_trait]
        impl CrudRepository<$domain> for $repo {
            async fn save(&self, record: $domain) -> RepoResult<$domain> {
                let now = chrono::Utc::now();
                match record.meta.id {
                    None => {
                        let inserted = entity::$module::Entity::insert($insert(&record, now))
                            .exec_with_returning(&*self.db)
                            .await
                            .map_err(backend)?;
                        Ok(inserted.into())
                    }
                    Some(id) => {
                        let expected = record.meta.version;
                        let result = entity::$module::Entity::update_many()
                            .set($update(&record, now))
                            .filter(entity::$module::Column::Id.eq(id))
                            .filter(entity::$module::Column::Version.eq(expected))
                            .exec(&*self.db)
                            .await
                            .map_err(backend)?;
                        if result.rows_affected == 0 {
                            return Err(RepositoryError::Conflict {
                                entity: <$domain as Record>::NAME,
                                id,
                                expected,
                            });
                        }
                        let reloaded = entity::$module::Entity::find_by_id(id)
                            .one(&*self.db)
                            .await
                            .map_err(backend)?
                            .ok_or_else(|| {
                                RepositoryError::Backend(anyhow!(
                                    "row {} vanished after update",
                                    id
                                ))
                            })?;
                        Ok(reloaded.into())
                    }
                }
            }

            async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<$domain>> {
                let found = entity::$module::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await
                    .map_err(backend)?;
                Ok(found.map(Into::into))
            }

            async fn find_all(&self) -> RepoResult<Vec<$domain>> {
                let query = entity::$module::Entity::find();
                $(let query = query.order_by_asc($order);)?
                let rows = query.all(&*self.db).await.map_err(backend)?;
                Ok(rows.into_iter().map(Into::into).collect())
            }

            async fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
                let count = entity::$module::Entity::find_by_id(id)
                    .count(&*self.db)
                    .await
                    .map_err(backend)?;
                Ok(count > 0)
            }

            async fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
                entity::$module::Entity::delete_by_id(id)
                    .exec(&*self.db)
                    .await
                    .map_err(backend)?;
                Ok(())
            }
        }
    };
}

crud_repository!(
    SeaOrmChanceRepository,
    Chance,
    chance,
    insert = mapper::chance_insert,
    update = mapper::chance_update,
    order_by = entity::chance::Column::Probability
);

crud_repository!(
    SeaOrmCountryRepository,
    Country,
    country,
    insert = mapper::country_insert,
    update = mapper::country_update
);

crud_repository!(
    SeaOrmCustomerRepository,
    Customer,
    customer,
    insert = mapper::customer_insert,
    update = mapper::customer_update
);

crud_repository!(
    SeaOrmFundingProgramRepository,
    FundingProgram,
    funding_program,
    insert = mapper::funding_program_insert,
    update = mapper::funding_program_update
);

crud_repository!(
    SeaOrmPayConditionRepository,
    PayCondition,
    pay_condition,
    insert = mapper::pay_condition_insert,
    update = mapper::pay_condition_update,
    order_by = entity::pay_condition::Column::Name
);

crud_repository!(
    SeaOrmProjectStatusRepository,
    ProjectStatus,
    project_status,
    insert = mapper::project_status_insert,
    update = mapper::project_status_update
);

crud_repository!(
    SeaOrmPublicHolidayRepository,
    PublicHoliday,
    public_holiday,
    insert = mapper::public_holiday_insert,
    update = mapper::public_holiday_update,
    order_by = entity::public_holiday::Column::Name
);

crud_repository!(
    SeaOrmRoleRepository,
    Role,
    role,
    insert = mapper::role_insert,
    update = mapper::role_update
);

crud_repository!(
    SeaOrmRoleRightRepository,
    RoleRight,
    role_right,
    insert = mapper::role_right_insert,
    update = mapper::role_right_update
);

crud_repository!(
    SeaOrmStateRepository,
    State,
    state,
    insert = mapper::state_insert,
    update = mapper::state_update
);

crud_repository!(
    SeaOrmSubcontractRepository,
    Subcontract,
    subcontract,
    insert = mapper::subcontract_insert,
    update = mapper::subcontract_update,
    order_by = entity::subcontract::Column::ContractTitle
);

crud_repository!(
    SeaOrmSystemModuleRepository,
    SystemModule,
    system_module,
    insert = mapper::system_module_insert,
    update = mapper::system_module_update,
    order_by = entity::system_module::Column::Name
);

#[async_trait]
impl PayConditionRepository for SeaOrmPayConditionRepository {
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<PayCondition>> {
        let rows = entity::pay_condition::Entity::find()
            .filter(entity::pay_condition::Column::Name.eq(name))
            .all(&*self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_deadline(&self, deadline: i32) -> RepoResult<Vec<PayCondition>> {
        let rows = entity::pay_condition::Entity::find()
            .filter(entity::pay_condition::Column::Deadline.eq(deadline))
            .all(&*self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl SubcontractRepository for SeaOrmSubcontractRepository {
    async fn find_by_contractor_id(
        &self,
        contractor_id: EntityId,
    ) -> RepoResult<Vec<Subcontract>> {
        let rows = entity::subcontract::Entity::find()
            .filter(entity::subcontract::Column::ContractorId.eq(contractor_id))
            .all(&*self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_customer_id(&self, customer_id: EntityId) -> RepoResult<Vec<Subcontract>> {
        let rows = entity::subcontract::Entity::find()
            .filter(entity::subcontract::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::subcontract::Column::ContractTitle)
            .all(&*self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_project_cost_center_id(
        &self,
        project_cost_center_id: EntityId,
    ) -> RepoResult<Vec<Subcontract>> {
        let rows = entity::subcontract::Entity::find()
            .filter(entity::subcontract::Column::ProjectCostCenterId.eq(project_cost_center_id))
            .all(&*self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
