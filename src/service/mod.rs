//! Upsert services - identity assignment in front of a repository.
//!
//! `UpsertService<M, R>` owns an [`IdentifierSequence`](crate::IdentifierSequence)
//! and a repository. On `save`, a new entity (one without an identity) is
//! copied with the next sequence value before being forwarded; an entity that
//! already has an identity is forwarded unchanged. `CustomerService<R>` adds
//! the customer name lookups.
//!
//! ## Quick Start
//!
//! ```ignore
//! use crud_service::{Customer, CustomerService, HashMapRepository};
//!
//! let service = CustomerService::new(HashMapRepository::new());
//! let jane = service.save(Customer::new("Jane"))?;   // id 1
//! let jon = service.save(Customer::new("Jon"))?;     // id 2
//! let again = service.save(jane.clone())?;           // still id 1
//!
//! assert!(service.save(None).is_err());
//! ```

mod customer;
#[cfg(feature = "http")]
pub mod http;
mod upsert;

pub use customer::CustomerService;
pub use upsert::UpsertService;
