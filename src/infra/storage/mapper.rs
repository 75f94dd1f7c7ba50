//! Mapping between contract records and SeaORM models.
//!
//! Each entity has three pieces: the row-to-record conversion, the insert
//! active model (id unset, version 1, both timestamps set) and the update
//! active model (domain columns plus the bumped version and `updated_at`;
//! id and `created_at` are left untouched).

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use uuid::Uuid;

use crate::contract::{
    Chance, Country, Customer, FundingProgram, Meta, PayCondition, ProjectStatus, PublicHoliday,
    Role, RoleRight, State, Subcontract, SystemModule,
};

use super::entity;

fn meta(id: i64, version: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Meta {
    Meta {
        id: Some(id),
        version,
        created_at: Some(created_at),
        updated_at: Some(updated_at),
    }
}

// ===== Chance =====

impl From<entity::chance::Model> for Chance {
    fn from(m: entity::chance::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            probability: m.probability,
        }
    }
}

pub(super) fn chance_insert(r: &Chance, now: DateTime<Utc>) -> entity::chance::ActiveModel {
    entity::chance::ActiveModel {
        id: NotSet,
        version: Set(1),
        probability: Set(r.probability),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn chance_update(r: &Chance, now: DateTime<Utc>) -> entity::chance::ActiveModel {
    entity::chance::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        probability: Set(r.probability),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== Country =====

impl From<entity::country::Model> for Country {
    fn from(m: entity::country::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
            label: m.label,
            is_default: m.is_default,
        }
    }
}

pub(super) fn country_insert(r: &Country, now: DateTime<Utc>) -> entity::country::ActiveModel {
    entity::country::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        label: Set(r.label.clone()),
        is_default: Set(r.is_default),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn country_update(r: &Country, now: DateTime<Utc>) -> entity::country::ActiveModel {
    entity::country::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        label: Set(r.label.clone()),
        is_default: Set(r.is_default),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== Customer =====

impl From<entity::customer::Model> for Customer {
    fn from(m: entity::customer::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            uuid: Some(m.uuid),
            branch_id: m.branch_id,
            city: m.city,
            company_type_id: m.company_type_id,
            country_id: m.country_id,
            customer_no: m.customer_no,
            customer_name1: m.customer_name1,
            customer_name2: m.customer_name2,
            email1: m.email1,
            email2: m.email2,
            email3: m.email3,
            email4: m.email4,
            homepage: m.homepage,
            hours_per_week: m.hours_per_week,
            max_hours_month: m.max_hours_month,
            max_hours_year: m.max_hours_year,
            note: m.note,
            phone: m.phone,
            state_id: m.state_id,
            street: m.street,
            tax_no: m.tax_no,
            tax_office: m.tax_office,
            zip_code: m.zip_code,
        }
    }
}

pub(super) fn customer_insert(r: &Customer, now: DateTime<Utc>) -> entity::customer::ActiveModel {
    entity::customer::ActiveModel {
        id: NotSet,
        version: Set(1),
        uuid: Set(r.uuid.unwrap_or_else(Uuid::new_v4)),
        branch_id: Set(r.branch_id),
        city: Set(r.city.clone()),
        company_type_id: Set(r.company_type_id),
        country_id: Set(r.country_id),
        customer_no: Set(r.customer_no.clone()),
        customer_name1: Set(r.customer_name1.clone()),
        customer_name2: Set(r.customer_name2.clone()),
        email1: Set(r.email1.clone()),
        email2: Set(r.email2.clone()),
        email3: Set(r.email3.clone()),
        email4: Set(r.email4.clone()),
        homepage: Set(r.homepage.clone()),
        hours_per_week: Set(r.hours_per_week),
        max_hours_month: Set(r.max_hours_month),
        max_hours_year: Set(r.max_hours_year),
        note: Set(r.note.clone()),
        phone: Set(r.phone.clone()),
        state_id: Set(r.state_id),
        street: Set(r.street.clone()),
        tax_no: Set(r.tax_no.clone()),
        tax_office: Set(r.tax_office.clone()),
        zip_code: Set(r.zip_code.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn customer_update(r: &Customer, now: DateTime<Utc>) -> entity::customer::ActiveModel {
    entity::customer::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        // external identifier is immutable
        uuid: NotSet,
        branch_id: Set(r.branch_id),
        city: Set(r.city.clone()),
        company_type_id: Set(r.company_type_id),
        country_id: Set(r.country_id),
        customer_no: Set(r.customer_no.clone()),
        customer_name1: Set(r.customer_name1.clone()),
        customer_name2: Set(r.customer_name2.clone()),
        email1: Set(r.email1.clone()),
        email2: Set(r.email2.clone()),
        email3: Set(r.email3.clone()),
        email4: Set(r.email4.clone()),
        homepage: Set(r.homepage.clone()),
        hours_per_week: Set(r.hours_per_week),
        max_hours_month: Set(r.max_hours_month),
        max_hours_year: Set(r.max_hours_year),
        note: Set(r.note.clone()),
        phone: Set(r.phone.clone()),
        state_id: Set(r.state_id),
        street: Set(r.street.clone()),
        tax_no: Set(r.tax_no.clone()),
        tax_office: Set(r.tax_office.clone()),
        zip_code: Set(r.zip_code.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== FundingProgram =====

impl From<entity::funding_program::Model> for FundingProgram {
    fn from(m: entity::funding_program::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
            default_funding_rate: m.default_funding_rate,
            default_hours_per_year: m.default_hours_per_year,
            default_research_share: m.default_research_share,
            default_stuff_flat: m.default_stuff_flat,
        }
    }
}

pub(super) fn funding_program_insert(
    r: &FundingProgram,
    now: DateTime<Utc>,
) -> entity::funding_program::ActiveModel {
    entity::funding_program::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        default_funding_rate: Set(r.default_funding_rate),
        default_hours_per_year: Set(r.default_hours_per_year),
        default_research_share: Set(r.default_research_share),
        default_stuff_flat: Set(r.default_stuff_flat),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn funding_program_update(
    r: &FundingProgram,
    now: DateTime<Utc>,
) -> entity::funding_program::ActiveModel {
    entity::funding_program::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        default_funding_rate: Set(r.default_funding_rate),
        default_hours_per_year: Set(r.default_hours_per_year),
        default_research_share: Set(r.default_research_share),
        default_stuff_flat: Set(r.default_stuff_flat),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== PayCondition =====

impl From<entity::pay_condition::Model> for PayCondition {
    fn from(m: entity::pay_condition::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
            deadline: m.deadline,
        }
    }
}

pub(super) fn pay_condition_insert(
    r: &PayCondition,
    now: DateTime<Utc>,
) -> entity::pay_condition::ActiveModel {
    entity::pay_condition::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        deadline: Set(r.deadline),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn pay_condition_update(
    r: &PayCondition,
    now: DateTime<Utc>,
) -> entity::pay_condition::ActiveModel {
    entity::pay_condition::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        deadline: Set(r.deadline),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== ProjectStatus =====

impl From<entity::project_status::Model> for ProjectStatus {
    fn from(m: entity::project_status::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
        }
    }
}

pub(super) fn project_status_insert(
    r: &ProjectStatus,
    now: DateTime<Utc>,
) -> entity::project_status::ActiveModel {
    entity::project_status::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn project_status_update(
    r: &ProjectStatus,
    now: DateTime<Utc>,
) -> entity::project_status::ActiveModel {
    entity::project_status::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== PublicHoliday =====

impl From<entity::public_holiday::Model> for PublicHoliday {
    fn from(m: entity::public_holiday::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
            date: m.date,
            is_fixed_date: m.is_fixed_date,
            sequence_no: m.sequence_no,
        }
    }
}

pub(super) fn public_holiday_insert(
    r: &PublicHoliday,
    now: DateTime<Utc>,
) -> entity::public_holiday::ActiveModel {
    entity::public_holiday::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        date: Set(r.date),
        is_fixed_date: Set(r.is_fixed_date),
        sequence_no: Set(r.sequence_no),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn public_holiday_update(
    r: &PublicHoliday,
    now: DateTime<Utc>,
) -> entity::public_holiday::ActiveModel {
    entity::public_holiday::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        date: Set(r.date),
        is_fixed_date: Set(r.is_fixed_date),
        sequence_no: Set(r.sequence_no),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== Role =====

impl From<entity::role::Model> for Role {
    fn from(m: entity::role::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
        }
    }
}

pub(super) fn role_insert(r: &Role, now: DateTime<Utc>) -> entity::role::ActiveModel {
    entity::role::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn role_update(r: &Role, now: DateTime<Utc>) -> entity::role::ActiveModel {
    entity::role::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== RoleRight =====

impl From<entity::role_right::Model> for RoleRight {
    fn from(m: entity::role_right::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            access_right: m.access_right,
            role_id: m.role_id,
        }
    }
}

pub(super) fn role_right_insert(
    r: &RoleRight,
    now: DateTime<Utc>,
) -> entity::role_right::ActiveModel {
    entity::role_right::ActiveModel {
        id: NotSet,
        version: Set(1),
        access_right: Set(r.access_right),
        role_id: Set(r.role_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn role_right_update(
    r: &RoleRight,
    now: DateTime<Utc>,
) -> entity::role_right::ActiveModel {
    entity::role_right::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        access_right: Set(r.access_right),
        role_id: Set(r.role_id),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== State =====

impl From<entity::state::Model> for State {
    fn from(m: entity::state::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
        }
    }
}

pub(super) fn state_insert(r: &State, now: DateTime<Utc>) -> entity::state::ActiveModel {
    entity::state::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn state_update(r: &State, now: DateTime<Utc>) -> entity::state::ActiveModel {
    entity::state::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== Subcontract =====

impl From<entity::subcontract::Model> for Subcontract {
    fn from(m: entity::subcontract::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            afa_months: m.afa_months,
            contractor_id: m.contractor_id,
            contract_title: m.contract_title,
            customer_id: m.customer_id,
            date: m.date,
            description: m.description,
            invoice_amount: m.invoice_amount,
            invoice_date: m.invoice_date,
            invoice_gross: m.invoice_gross,
            invoice_net: m.invoice_net,
            invoice_no: m.invoice_no,
            is_afa: m.is_afa,
            net_or_gross: m.net_or_gross,
            note: m.note,
            project_cost_center_id: m.project_cost_center_id,
        }
    }
}

pub(super) fn subcontract_insert(
    r: &Subcontract,
    now: DateTime<Utc>,
) -> entity::subcontract::ActiveModel {
    entity::subcontract::ActiveModel {
        id: NotSet,
        version: Set(1),
        afa_months: Set(r.afa_months),
        contractor_id: Set(r.contractor_id),
        contract_title: Set(r.contract_title.clone()),
        customer_id: Set(r.customer_id),
        date: Set(r.date),
        description: Set(r.description.clone()),
        invoice_amount: Set(r.invoice_amount),
        invoice_date: Set(r.invoice_date),
        invoice_gross: Set(r.invoice_gross),
        invoice_net: Set(r.invoice_net),
        invoice_no: Set(r.invoice_no.clone()),
        is_afa: Set(r.is_afa),
        net_or_gross: Set(r.net_or_gross),
        note: Set(r.note.clone()),
        project_cost_center_id: Set(r.project_cost_center_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn subcontract_update(
    r: &Subcontract,
    now: DateTime<Utc>,
) -> entity::subcontract::ActiveModel {
    entity::subcontract::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        afa_months: Set(r.afa_months),
        contractor_id: Set(r.contractor_id),
        contract_title: Set(r.contract_title.clone()),
        customer_id: Set(r.customer_id),
        date: Set(r.date),
        description: Set(r.description.clone()),
        invoice_amount: Set(r.invoice_amount),
        invoice_date: Set(r.invoice_date),
        invoice_gross: Set(r.invoice_gross),
        invoice_net: Set(r.invoice_net),
        invoice_no: Set(r.invoice_no.clone()),
        is_afa: Set(r.is_afa),
        net_or_gross: Set(r.net_or_gross),
        note: Set(r.note.clone()),
        project_cost_center_id: Set(r.project_cost_center_id),
        created_at: NotSet,
        updated_at: Set(now),
    }
}

// ===== SystemModule =====

impl From<entity::system_module::Model> for SystemModule {
    fn from(m: entity::system_module::Model) -> Self {
        Self {
            meta: meta(m.id, m.version, m.created_at, m.updated_at),
            name: m.name,
        }
    }
}

pub(super) fn system_module_insert(
    r: &SystemModule,
    now: DateTime<Utc>,
) -> entity::system_module::ActiveModel {
    entity::system_module::ActiveModel {
        id: NotSet,
        version: Set(1),
        name: Set(r.name.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub(super) fn system_module_update(
    r: &SystemModule,
    now: DateTime<Utc>,
) -> entity::system_module::ActiveModel {
    entity::system_module::ActiveModel {
        id: NotSet,
        version: Set(r.meta.version + 1),
        name: Set(r.name.clone()),
        created_at: NotSet,
        updated_at: Set(now),
    }
}
