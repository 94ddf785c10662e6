//! Repository lifecycle events.
//!
//! [`EmittingRepository`] wraps any repository and, after a successful write,
//! emits `"<collection>.saved"` with the entity as JSON or
//! `"<collection>.deleted"` with the deleted identity.
//!
//! **Requires the `emitter` feature to be enabled.**
//!
//! ```ignore
//! use crud_service::{EmittingRepository, HashMapRepository, CustomerService};
//!
//! let repo = EmittingRepository::new(HashMapRepository::new());
//! repo.on("customers.saved", |json| {
//!     println!("customer saved: {}", json);
//! });
//! let service = CustomerService::new(repo);
//! ```

mod repository;

pub use repository::{deleted_event, saved_event, EmittingRepository};
