//! Database migrations for the IWS manager tables.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_tables::Migration)]
    }
}

mod m20250601_000001_create_tables {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    /// Columns shared by every table.
    #[derive(DeriveIden)]
    enum Base {
        Id,
        Version,
        CreatedAt,
        UpdatedAt,
    }

    fn base_columns(table: &mut TableCreateStatement) {
        table
            .col(
                ColumnDef::new(Base::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Base::Version).big_integer().not_null())
            .col(
                ColumnDef::new(Base::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Base::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            );
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table.table(Chance::Table).if_not_exists();
            base_columns(&mut table);
            table.col(ColumnDef::new(Chance::Probability).decimal());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(Country::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(Country::Name).string().not_null())
                .col(ColumnDef::new(Country::Label).string().not_null())
                .col(ColumnDef::new(Country::IsDefault).boolean());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(Customer::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(
                    ColumnDef::new(Customer::Uuid)
                        .uuid()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(Customer::BranchId).big_integer())
                .col(ColumnDef::new(Customer::City).string().not_null())
                .col(ColumnDef::new(Customer::CompanyTypeId).big_integer())
                .col(ColumnDef::new(Customer::CountryId).big_integer())
                .col(ColumnDef::new(Customer::CustomerNo).string().not_null())
                .col(ColumnDef::new(Customer::CustomerName1).string().not_null())
                .col(ColumnDef::new(Customer::CustomerName2).string().not_null())
                .col(ColumnDef::new(Customer::Email1).string().not_null())
                .col(ColumnDef::new(Customer::Email2).string().not_null())
                .col(ColumnDef::new(Customer::Email3).string().not_null())
                .col(ColumnDef::new(Customer::Email4).string().not_null())
                .col(ColumnDef::new(Customer::Homepage).string().not_null())
                .col(ColumnDef::new(Customer::HoursPerWeek).double())
                .col(ColumnDef::new(Customer::MaxHoursMonth).double())
                .col(ColumnDef::new(Customer::MaxHoursYear).double())
                .col(ColumnDef::new(Customer::Note).string().not_null())
                .col(ColumnDef::new(Customer::Phone).string().not_null())
                .col(ColumnDef::new(Customer::StateId).big_integer())
                .col(ColumnDef::new(Customer::Street).string().not_null())
                .col(ColumnDef::new(Customer::TaxNo).string().not_null())
                .col(ColumnDef::new(Customer::TaxOffice).string().not_null())
                .col(ColumnDef::new(Customer::ZipCode).string().not_null());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(FundingProgram::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(FundingProgram::Name).string().not_null())
                .col(ColumnDef::new(FundingProgram::DefaultFundingRate).decimal())
                .col(ColumnDef::new(FundingProgram::DefaultHoursPerYear).decimal())
                .col(ColumnDef::new(FundingProgram::DefaultResearchShare).decimal())
                .col(ColumnDef::new(FundingProgram::DefaultStuffFlat).decimal());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(PayCondition::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(PayCondition::Name).string().not_null())
                .col(ColumnDef::new(PayCondition::Deadline).integer());
            manager.create_table(table).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_paycondition_name")
                        .table(PayCondition::Table)
                        .col(PayCondition::Name)
                        .to_owned(),
                )
                .await?;

            let mut table = Table::create();
            table.table(ProjectStatus::Table).if_not_exists();
            base_columns(&mut table);
            table.col(ColumnDef::new(ProjectStatus::Name).string().not_null());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(PublicHoliday::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(PublicHoliday::Name).string().not_null())
                .col(ColumnDef::new(PublicHoliday::Date).date())
                .col(ColumnDef::new(PublicHoliday::IsFixedDate).boolean())
                .col(ColumnDef::new(PublicHoliday::SequenceNo).integer());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(Role::Table).if_not_exists();
            base_columns(&mut table);
            table.col(ColumnDef::new(Role::Name).string().not_null());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(RoleRight::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(RoleRight::AccessRight).integer())
                .col(ColumnDef::new(RoleRight::RoleId).big_integer())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_roleright_role")
                        .from(RoleRight::Table, RoleRight::RoleId)
                        .to(Role::Table, Base::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                );
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(State::Table).if_not_exists();
            base_columns(&mut table);
            table.col(ColumnDef::new(State::Name).string().not_null());
            manager.create_table(table).await?;

            let mut table = Table::create();
            table.table(Subcontract::Table).if_not_exists();
            base_columns(&mut table);
            table
                .col(ColumnDef::new(Subcontract::AfaMonths).integer())
                .col(ColumnDef::new(Subcontract::ContractorId).big_integer())
                .col(ColumnDef::new(Subcontract::ContractTitle).string().not_null())
                .col(ColumnDef::new(Subcontract::CustomerId).big_integer())
                .col(ColumnDef::new(Subcontract::Date).date())
                .col(ColumnDef::new(Subcontract::Description).string())
                .col(ColumnDef::new(Subcontract::InvoiceAmount).decimal())
                .col(ColumnDef::new(Subcontract::InvoiceDate).date())
                .col(ColumnDef::new(Subcontract::InvoiceGross).decimal())
                .col(ColumnDef::new(Subcontract::InvoiceNet).decimal())
                .col(ColumnDef::new(Subcontract::InvoiceNo).string())
                .col(ColumnDef::new(Subcontract::IsAfa).boolean())
                .col(ColumnDef::new(Subcontract::NetOrGross).boolean())
                .col(ColumnDef::new(Subcontract::Note).string())
                .col(ColumnDef::new(Subcontract::ProjectCostCenterId).big_integer())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_subcontract_customer")
                        .from(Subcontract::Table, Subcontract::CustomerId)
                        .to(Customer::Table, Base::Id)
                        .on_delete(ForeignKeyAction::Restrict),
                );
            manager.create_table(table).await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_subcontract_contractor_id")
                        .table(Subcontract::Table)
                        .col(Subcontract::ContractorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_subcontract_customer_id")
                        .table(Subcontract::Table)
                        .col(Subcontract::CustomerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_subcontract_project_cost_center_id")
                        .table(Subcontract::Table)
                        .col(Subcontract::ProjectCostCenterId)
                        .to_owned(),
                )
                .await?;

            let mut table = Table::create();
            table.table(SystemModule::Table).if_not_exists();
            base_columns(&mut table);
            table.col(ColumnDef::new(SystemModule::Name).string().not_null());
            manager.create_table(table).await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SystemModule::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Subcontract::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(State::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(RoleRight::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Role::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PublicHoliday::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProjectStatus::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PayCondition::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(FundingProgram::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Customer::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Country::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Chance::Table).to_owned())
                .await?;
            Ok(())
        }
    }

    #[derive(DeriveIden)]
    enum Chance {
        Table,
        Probability,
    }

    #[derive(DeriveIden)]
    enum Country {
        Table,
        Name,
        Label,
        IsDefault,
    }

    #[derive(DeriveIden)]
    enum Customer {
        Table,
        Uuid,
        BranchId,
        City,
        CompanyTypeId,
        CountryId,
        CustomerNo,
        CustomerName1,
        CustomerName2,
        Email1,
        Email2,
        Email3,
        Email4,
        Homepage,
        HoursPerWeek,
        MaxHoursMonth,
        MaxHoursYear,
        Note,
        Phone,
        StateId,
        Street,
        TaxNo,
        TaxOffice,
        ZipCode,
    }

    #[derive(DeriveIden)]
    enum FundingProgram {
        #[sea_orm(iden = "fundingprogram")]
        Table,
        Name,
        DefaultFundingRate,
        DefaultHoursPerYear,
        DefaultResearchShare,
        DefaultStuffFlat,
    }

    #[derive(DeriveIden)]
    enum PayCondition {
        #[sea_orm(iden = "paycondition")]
        Table,
        Name,
        Deadline,
    }

    #[derive(DeriveIden)]
    enum ProjectStatus {
        #[sea_orm(iden = "projectstatus")]
        Table,
        Name,
    }

    #[derive(DeriveIden)]
    enum PublicHoliday {
        #[sea_orm(iden = "publicholiday")]
        Table,
        Name,
        Date,
        IsFixedDate,
        SequenceNo,
    }

    #[derive(DeriveIden)]
    enum Role {
        Table,
        Name,
    }

    #[derive(DeriveIden)]
    enum RoleRight {
        #[sea_orm(iden = "roleright")]
        Table,
        AccessRight,
        RoleId,
    }

    #[derive(DeriveIden)]
    enum State {
        Table,
        Name,
    }

    #[derive(DeriveIden)]
    enum Subcontract {
        Table,
        AfaMonths,
        ContractorId,
        ContractTitle,
        CustomerId,
        Date,
        Description,
        InvoiceAmount,
        InvoiceDate,
        InvoiceGross,
        InvoiceNet,
        InvoiceNo,
        IsAfa,
        NetOrGross,
        Note,
        ProjectCostCenterId,
    }

    #[derive(DeriveIden)]
    enum SystemModule {
        #[sea_orm(iden = "systemmodule")]
        Table,
        Name,
    }
}
