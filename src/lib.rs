//! Entity CRUD services for the IWS manager backend.
//!
//! Each service binds exactly one domain entity (customers, countries,
//! funding programs, roles, holidays, subcontracts and related master data)
//! to one repository collaborator and exposes create / find / update /
//! delete with argument and existence checks. Everything else - identity
//! assignment, version counting, ordering, conflict detection - is the
//! store's job; the services only translate its answers.

// Public exports
pub mod contract;
pub use contract::{
    Chance, Country, Customer, EntityId, FundingProgram, Meta, PayCondition, ProjectStatus,
    PublicHoliday, Record, RepositoryError, Role, RoleRight, ServiceError, State, Subcontract,
    SystemModule,
};

pub mod domain;
pub use domain::{
    ChanceService, CountryService, CrudService, CustomerService, FundingProgramService,
    PayConditionService, ProjectStatusService, PublicHolidayService, RoleRightService,
    RoleService, StateService, SubcontractService, SystemModuleService,
};

pub mod config;
pub mod infra;
