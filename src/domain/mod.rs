//! Domain layer - repository traits and the generic CRUD service.

pub mod repository;
pub mod service;

pub use repository::{CrudRepository, PayConditionRepository, SubcontractRepository};
pub use service::{
    ChanceService, CountryService, CrudService, CustomerService, FundingProgramService,
    PayConditionService, ProjectStatusService, PublicHolidayService, RoleRightService,
    RoleService, StateService, SubcontractService, SystemModuleService,
};
