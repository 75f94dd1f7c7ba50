//! Pay condition service: name-ordered listing and the name and deadline
//! finders.

mod common;

use std::sync::Arc;

use iws_services::{PayCondition, PayConditionService};

use common::MockPayConditionRepo;

fn pay_condition(name: &str, deadline: i32) -> PayCondition {
    PayCondition {
        name: name.to_string(),
        deadline: Some(deadline),
        ..Default::default()
    }
}

#[tokio::test]
async fn find_all_orders_by_name_ascending() {
    let repo = Arc::new(MockPayConditionRepo::new());
    repo.inner.seed(pay_condition("Net 30", 30));
    repo.inner.seed(pay_condition("Immediate", 0));
    repo.inner.seed(pay_condition("Net 14", 14));
    let service = PayConditionService::new(repo);

    let all = service.find_all().await.expect("find_all");
    let names: Vec<_> = all.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Immediate", "Net 14", "Net 30"]);
}

#[tokio::test]
async fn get_by_name_returns_only_matches() {
    let repo = Arc::new(MockPayConditionRepo::new());
    repo.inner.seed(pay_condition("Net 30", 30));
    repo.inner.seed(pay_condition("Net 14", 14));
    let service = PayConditionService::new(repo);

    let found = service.get_by_name("Net 14").await.expect("get_by_name");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Net 14");

    let none = service.get_by_name("Net 60").await.expect("get_by_name");
    assert!(none.is_empty());
}

#[tokio::test]
async fn get_by_deadline_returns_all_matching_conditions() {
    let repo = Arc::new(MockPayConditionRepo::new());
    repo.inner.seed(pay_condition("Net 30", 30));
    repo.inner.seed(pay_condition("Thirty days", 30));
    repo.inner.seed(pay_condition("Net 14", 14));
    let service = PayConditionService::new(repo);

    let found = service.get_by_deadline(30).await.expect("get_by_deadline");
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.deadline == Some(30)));
}

#[tokio::test]
async fn update_copies_name_and_deadline() {
    let repo = Arc::new(MockPayConditionRepo::new());
    let seeded = repo.inner.seed(pay_condition("Net 30", 30));
    let service = PayConditionService::new(repo);

    let updated = service
        .update(seeded.meta.id.unwrap(), &pay_condition("Net 45", 45))
        .await
        .expect("update");

    assert_eq!(updated.name, "Net 45");
    assert_eq!(updated.deadline, Some(45));
    assert_eq!(updated.meta.id, seeded.meta.id);
}
