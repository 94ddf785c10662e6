//! Lifecycle events observed through the customer service.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crud_service::emitter::saved_event;
use crud_service::{Customer, CustomerService, EmittingRepository, HashMapRepository};

#[test]
fn service_saves_emit_identified_customers() {
    let repo = EmittingRepository::new(HashMapRepository::<Customer>::new());

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    repo.on(&saved_event::<Customer>(), move |json| {
        let customer: Customer = serde_json::from_str(&json).unwrap();
        sink.lock().unwrap().push(customer);
    });

    let service = CustomerService::new(repo);
    let jane = service.save(Customer::new("Jane")).unwrap();
    let jon = service.save(Customer::new("Jon")).unwrap();

    // rejected saves never reach the repository, so no event
    assert!(service.save(None).is_err());

    // EventEmitter is async, give it time
    thread::sleep(Duration::from_millis(50));

    let mut received = received.lock().unwrap().clone();
    received.sort_by_key(|c| crud_service::Identifiable::id(c));
    assert_eq!(received, vec![jane, jon]);

    // name queries pass through the decorator
    assert_eq!(service.find_by("Jon").unwrap().map(|c| c.name().to_string()), Some("Jon".into()));
}
