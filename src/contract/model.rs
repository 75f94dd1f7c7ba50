//! Contract models for the IWS manager service layer.
//!
//! These models are transport-agnostic domain records. NO serde derives -
//! these are pure domain types; the storage layer owns the column mapping.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Store-assigned numeric identifier shared by all entities.
pub type EntityId = i64;

/// Identity, optimistic-locking version and audit fields common to every
/// record. The store assigns all of them: `id` on first persist, `version`
/// starting at 1 and incremented on each successful update, timestamps on
/// insert and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    /// Primary key, `None` until first persist, immutable thereafter.
    pub id: Option<EntityId>,
    /// Optimistic-concurrency counter. A stale value at save time makes the
    /// store reject the write with a conflict.
    pub version: i64,
    /// Set by the store on insert.
    pub created_at: Option<DateTime<Utc>>,
    /// Maintained by the store on each write.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Behavior shared by every domain record: access to the meta block and the
/// field-copy step the update operation performs.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages.
    const NAME: &'static str;

    fn meta(&self) -> &Meta;

    fn meta_mut(&mut self) -> &mut Meta;

    /// Copy the mutable domain fields of `details` onto `self`. Identity,
    /// version and audit fields are never touched; they stay as fetched.
    fn apply_details(&mut self, details: &Self);

    fn id(&self) -> Option<EntityId> {
        self.meta().id
    }
}

/// Implements [`Record`] for an entity: the field list is exactly the set of
/// mutable fields copied on update.
macro_rules! record {
    ($ty:ident, $name:literal, [$($field:ident),+ $(,)?]) => {
        impl Record for $ty {
            const NAME: &'static str = $name;

            fn meta(&self) -> &Meta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut Meta {
                &mut self.meta
            }

            fn apply_details(&mut self, details: &Self) {
                $(self.$field = details.$field.clone();)+
            }
        }
    };
}

/// Sales opportunity with a win probability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chance {
    pub meta: Meta,
    pub probability: Option<Decimal>,
}

record!(Chance, "Chance", [probability]);

/// Country reference data. At most one country is flagged as the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    pub meta: Meta,
    pub name: String,
    pub label: String,
    pub is_default: Option<bool>,
}

record!(Country, "Country", [name, label, is_default]);

/// Customer master record. Relations (branch, company type, country, state)
/// are plain foreign-key lookups; nothing is cascaded from this layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub meta: Meta,
    /// External identifier assigned by the store on first persist.
    pub uuid: Option<Uuid>,
    pub branch_id: Option<EntityId>,
    pub city: String,
    pub company_type_id: Option<EntityId>,
    pub country_id: Option<EntityId>,
    pub customer_no: String,
    pub customer_name1: String,
    pub customer_name2: String,
    pub email1: String,
    pub email2: String,
    pub email3: String,
    pub email4: String,
    pub homepage: String,
    pub hours_per_week: Option<f64>,
    pub max_hours_month: Option<f64>,
    pub max_hours_year: Option<f64>,
    pub note: String,
    pub phone: String,
    pub state_id: Option<EntityId>,
    pub street: String,
    pub tax_no: String,
    pub tax_office: String,
    pub zip_code: String,
}

record!(
    Customer,
    "Customer",
    [
        branch_id,
        city,
        company_type_id,
        country_id,
        customer_no,
        customer_name1,
        customer_name2,
        email1,
        email2,
        email3,
        email4,
        homepage,
        hours_per_week,
        max_hours_month,
        max_hours_year,
        note,
        phone,
        state_id,
        street,
        tax_no,
        tax_office,
        zip_code,
    ]
);

/// Funding program with default calculation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundingProgram {
    pub meta: Meta,
    pub name: String,
    pub default_funding_rate: Option<Decimal>,
    pub default_hours_per_year: Option<Decimal>,
    pub default_research_share: Option<Decimal>,
    pub default_stuff_flat: Option<Decimal>,
}

record!(
    FundingProgram,
    "FundingProgram",
    [
        name,
        default_funding_rate,
        default_hours_per_year,
        default_research_share,
        default_stuff_flat,
    ]
);

/// Payment condition with a deadline in days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayCondition {
    pub meta: Meta,
    pub name: String,
    pub deadline: Option<i32>,
}

record!(PayCondition, "PayCondition", [name, deadline]);

/// Project status reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStatus {
    pub meta: Meta,
    pub name: String,
}

record!(ProjectStatus, "ProjectStatus", [name]);

/// Public holiday, optionally fixed to the same date every year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicHoliday {
    pub meta: Meta,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub is_fixed_date: Option<bool>,
    pub sequence_no: Option<i32>,
}

record!(PublicHoliday, "PublicHoliday", [name, date, is_fixed_date, sequence_no]);

/// Access-control role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Role {
    pub meta: Meta,
    pub name: String,
}

record!(Role, "Role", [name]);

/// Access right granted to a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRight {
    pub meta: Meta,
    pub access_right: Option<i32>,
    pub role_id: Option<EntityId>,
}

record!(RoleRight, "RoleRight", [access_right, role_id]);

/// Federal state reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub meta: Meta,
    pub name: String,
}

record!(State, "State", [name]);

/// Subcontract awarded to a contractor on behalf of a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subcontract {
    pub meta: Meta,
    pub afa_months: Option<i32>,
    pub contractor_id: Option<EntityId>,
    pub contract_title: String,
    pub customer_id: Option<EntityId>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub invoice_amount: Option<Decimal>,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_gross: Option<Decimal>,
    pub invoice_net: Option<Decimal>,
    pub invoice_no: Option<String>,
    pub is_afa: Option<bool>,
    pub net_or_gross: Option<bool>,
    pub note: Option<String>,
    pub project_cost_center_id: Option<EntityId>,
}

record!(
    Subcontract,
    "Subcontract",
    [
        afa_months,
        contractor_id,
        contract_title,
        customer_id,
        date,
        description,
        invoice_amount,
        invoice_date,
        invoice_gross,
        invoice_net,
        invoice_no,
        is_afa,
        net_or_gross,
        note,
        project_cost_center_id,
    ]
);

/// Licensable application module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemModule {
    pub meta: Meta,
    pub name: String,
}

record!(SystemModule, "SystemModule", [name]);
