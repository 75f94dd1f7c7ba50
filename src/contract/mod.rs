//! Contract layer - public domain models and error types.
//!
//! This layer contains transport-agnostic records and errors.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::{RepositoryError, ServiceError};
pub use model::{
    Chance, Country, Customer, EntityId, FundingProgram, Meta, PayCondition, ProjectStatus,
    PublicHoliday, Record, Role, RoleRight, State, Subcontract, SystemModule,
};
