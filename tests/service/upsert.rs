//! Identity assignment and lookup behaviour of `CustomerService`.

use std::sync::Arc;

use crud_service::{
    Customer, CustomerService, HashMapRepository, Identifiable, IdentifierSequence, ServiceError,
};

use crate::support::RecordingRepository;

fn recording_service() -> (Arc<RecordingRepository>, CustomerService<Arc<RecordingRepository>>) {
    let repo = Arc::new(RecordingRepository::new());
    let service = CustomerService::new(Arc::clone(&repo));
    (repo, service)
}

// ============================================================================
// Identity assignment
// ============================================================================

#[test]
fn new_customers_get_increasing_ids_from_one() {
    let (repo, service) = recording_service();

    // content does not matter, duplicates included
    let names = ["Jane", "Jon", "Jane", "", "Pie Doe"];
    let ids: Vec<_> = names
        .iter()
        .map(|name| service.save(Customer::new(*name)).unwrap().id())
        .collect();

    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);

    // the repository received the identified copies
    let forwarded: Vec<_> = repo.saved().iter().map(|c| c.id()).collect();
    assert_eq!(forwarded, ids);
}

#[test]
fn existing_identity_is_forwarded_unchanged() {
    let (repo, service) = recording_service();

    let existing = Customer::new("Jane").identified_by(42);
    let saved = service.save(existing.clone()).unwrap();

    assert_eq!(saved, existing);
    assert_eq!(repo.saved(), vec![existing]);
    assert_eq!(service.sequence().current(), 0);
}

#[test]
fn existing_identities_do_not_consume_sequence_values() {
    let (_repo, service) = recording_service();

    let first = service.save(Customer::new("Jane")).unwrap();
    let existing = service.save(Customer::new("Jon").identified_by(42)).unwrap();
    let second = service.save(Customer::new("Pie")).unwrap();

    assert_eq!(first.id(), Some(1));
    assert_eq!(existing.id(), Some(42));
    assert_eq!(second.id(), Some(2));
}

#[test]
fn caller_entity_is_not_mutated() {
    let (_repo, service) = recording_service();

    let jane = Customer::new("Jane");
    let saved = service.save(jane.clone()).unwrap();

    assert!(jane.is_new());
    assert_eq!(saved.name(), jane.name());
    assert_eq!(saved.id(), Some(1));
}

#[test]
fn custom_sequence_start() {
    let service = CustomerService::with_sequence(
        HashMapRepository::<Customer>::new(),
        IdentifierSequence::starting_at(1000),
    );

    assert_eq!(service.save(Customer::new("Jane")).unwrap().id(), Some(1001));
    assert_eq!(service.next_id().unwrap(), 1002);
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn save_none_fails_without_reaching_repository() {
    let (repo, service) = recording_service();

    let err = service.save(None).unwrap_err();

    assert_eq!(err, ServiceError::IllegalState("Customer is required".into()));
    assert_eq!(repo.save_calls(), 0);
    assert_eq!(service.sequence().current(), 0);
}

#[test]
fn save_accepts_some() {
    let (repo, service) = recording_service();

    let saved = service.save(Some(Customer::new("Jane"))).unwrap();

    assert_eq!(saved.id(), Some(1));
    assert_eq!(repo.save_calls(), 1);
}

#[test]
fn unconfigured_service_fails_fast() {
    let service = CustomerService::<RecordingRepository>::unconfigured();

    let expected = ServiceError::IllegalState("CustomerRepository was not properly configured".into());
    assert_eq!(service.save(Customer::new("Jane")).unwrap_err(), expected);
    assert_eq!(service.find_by("Jane").unwrap_err(), expected);
    assert_eq!(service.find_by_id(1).unwrap_err(), expected);

    // the missing entity is reported before the missing repository
    assert_eq!(
        service.save(None).unwrap_err(),
        ServiceError::IllegalState("Customer is required".into())
    );
}

// ============================================================================
// Name lookups
// ============================================================================

#[test]
fn find_by_unknown_name_is_none() {
    let (repo, service) = recording_service();

    assert_eq!(service.find_by("unknown").unwrap(), None);
    assert_eq!(repo.name_lookups(), vec!["unknown".to_string()]);
}

#[test]
fn find_by_name_returns_repository_entity() {
    let jane = Customer::new("Jane").identified_by(7);
    let repo = Arc::new(RecordingRepository::new().with_customer(jane.clone()));
    let service = CustomerService::new(Arc::clone(&repo));

    assert_eq!(service.find_by("Jane").unwrap(), Some(jane));
    assert_eq!(repo.name_lookups(), vec!["Jane".to_string()]);
}

#[test]
fn find_by_name_like_with_in_memory_repository() {
    let service = CustomerService::new(HashMapRepository::<Customer>::new());
    service.save(Customer::new("Jon Doe")).unwrap();
    let jane = service.save(Customer::new("Jane Doe")).unwrap();

    assert_eq!(service.find_by_name_like("Ja%").unwrap(), Some(jane));
    assert_eq!(
        service.find_by_name_like("%Doe").unwrap().and_then(|c| c.id()),
        Some(1)
    );
    assert_eq!(service.find_by_name_like("%Smith").unwrap(), None);
}
