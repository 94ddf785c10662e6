//! Derived `Identifiable` entities through the generic upsert service.

use crud_service::{CrudRepository, HashMapRepository, Identifiable, UpsertService};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Identifiable)]
struct OrderLine {
    id: Option<u64>,
    sku: String,
    quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Identifiable)]
#[identifiable(collection = "accounts")]
struct Account {
    #[identifiable(id)]
    number: Option<u64>,
    owner: String,
}

#[test]
fn default_collection_is_snake_case_plural() {
    assert_eq!(OrderLine::COLLECTION, "order_lines");
    assert_eq!(Account::COLLECTION, "accounts");
}

#[test]
fn marked_field_is_the_identity() {
    let account = Account {
        number: None,
        owner: "Jane".into(),
    };
    assert!(account.is_new());

    let identified = account.identified_by(12);
    assert_eq!(identified.number, Some(12));
    assert_eq!(identified.id(), Some(12));
    assert_eq!(account.number, None);
}

#[test]
fn generic_service_over_derived_entity() {
    let repo = HashMapRepository::<OrderLine>::new();
    let service: UpsertService<OrderLine, _> = UpsertService::new(repo.clone());

    let line = service
        .save(OrderLine {
            id: None,
            sku: "sku-1".into(),
            quantity: 2,
        })
        .unwrap();
    assert_eq!(line.id(), Some(1));

    let err = service.save(None).unwrap_err();
    assert_eq!(err.to_string(), "OrderLine is required");

    let stored = repo.find_by_id(1).unwrap().unwrap();
    assert_eq!(stored, line);
}

#[test]
fn unconfigured_generic_service_names_entity() {
    let service = UpsertService::<Account, HashMapRepository<Account>>::unconfigured();
    let err = service.find_all().unwrap_err();
    assert_eq!(err.to_string(), "AccountRepository was not properly configured");
}
