//! Mandated listing orders exercised against the real SeaORM repositories
//! on an in-memory SQLite database.
//!
//! The mock-backed suites bind their own comparators, so the `order_by`
//! clauses in the storage layer are only observable here. Records are
//! inserted out of order on purpose.

use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use iws_services::config::Config;
use iws_services::infra::storage::connect;
use iws_services::infra::storage::repositories::{
    SeaOrmChanceRepository, SeaOrmPayConditionRepository, SeaOrmPublicHolidayRepository,
    SeaOrmSubcontractRepository, SeaOrmSystemModuleRepository,
};
use iws_services::{
    Chance, ChanceService, PayCondition, PayConditionService, PublicHoliday,
    PublicHolidayService, Subcontract, SubcontractService, SystemModule, SystemModuleService,
};

// A pooled in-memory SQLite database is one database per connection, so
// the pool is pinned to a single connection.
async fn db() -> Arc<DatabaseConnection> {
    let config = Config {
        max_connections: 1,
        ..Config::default()
    };
    Arc::new(connect(&config).await.expect("connect"))
}

#[tokio::test]
async fn chance_find_all_orders_by_probability() {
    let service = ChanceService::new(Arc::new(SeaOrmChanceRepository::new(db().await)));

    for probability in [Decimal::new(7550, 2), Decimal::new(1000, 2), Decimal::new(5025, 2)] {
        service
            .create(Chance {
                probability: Some(probability),
                ..Default::default()
            })
            .await
            .expect("create");
    }

    let all = service.find_all().await.expect("find_all");
    let probabilities: Vec<_> = all.into_iter().filter_map(|c| c.probability).collect();
    assert_eq!(
        probabilities,
        vec![
            Decimal::new(1000, 2),
            Decimal::new(5025, 2),
            Decimal::new(7550, 2),
        ]
    );
}

#[tokio::test]
async fn pay_condition_find_all_orders_by_name() {
    let service =
        PayConditionService::new(Arc::new(SeaOrmPayConditionRepository::new(db().await)));

    for name in ["Net 30", "Immediate", "Net 14"] {
        service
            .create(PayCondition {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .expect("create");
    }

    let all = service.find_all().await.expect("find_all");
    let names: Vec<_> = all.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Immediate", "Net 14", "Net 30"]);
}

#[tokio::test]
async fn public_holiday_find_all_orders_by_name() {
    let service =
        PublicHolidayService::new(Arc::new(SeaOrmPublicHolidayRepository::new(db().await)));

    for name in ["Whit Monday", "Christmas Day", "Labour Day"] {
        service
            .create(PublicHoliday {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .expect("create");
    }

    let all = service.find_all().await.expect("find_all");
    let names: Vec<_> = all.into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Christmas Day", "Labour Day", "Whit Monday"]);
}

#[tokio::test]
async fn subcontract_find_all_orders_by_contract_title() {
    let service =
        SubcontractService::new(Arc::new(SeaOrmSubcontractRepository::new(db().await)));

    for title in ["Wiring", "Assembly", "Painting"] {
        service
            .create(Subcontract {
                contract_title: title.to_string(),
                ..Default::default()
            })
            .await
            .expect("create");
    }

    let all = service.find_all().await.expect("find_all");
    let titles: Vec<_> = all.into_iter().map(|s| s.contract_title).collect();
    assert_eq!(titles, vec!["Assembly", "Painting", "Wiring"]);
}

#[tokio::test]
async fn system_module_find_all_orders_by_name() {
    let service =
        SystemModuleService::new(Arc::new(SeaOrmSystemModuleRepository::new(db().await)));

    for name in ["Projects", "Billing", "Absence"] {
        service
            .create(SystemModule {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .expect("create");
    }

    let all = service.find_all().await.expect("find_all");
    let names: Vec<_> = all.into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Absence", "Billing", "Projects"]);
}
