//! Entity upsert service over pluggable CRUD repositories.
//!
//! The service decides, per entity, whether it is new (no identity yet) and
//! assigns the next value of an owned [`IdentifierSequence`] before handing
//! the entity to its repository.
//!
//! ```ignore
//! use crud_service::{Customer, CustomerService, HashMapRepository};
//!
//! let service = CustomerService::new(HashMapRepository::new());
//! let jane = service.save(Customer::new("Jane"))?;
//! assert_eq!(jane.id(), Some(1));
//! assert_eq!(service.find_by("Jane")?, Some(jane));
//! ```

// Lets `#[derive(Identifiable)]` resolve `crud_service::` paths inside this crate.
extern crate self as crud_service;

mod config;
mod error;
pub mod function;
mod hashmap;
mod model;
mod repository;
mod sequence;
mod service;

#[cfg(feature = "emitter")]
pub mod emitter;

pub use crate::config::{IdentifierConfig, Level, LoggerConfig, ServerConfig, ServiceConfig};
pub use error::ServiceError;
pub use hashmap::HashMapRepository;
pub use model::{Customer, Identifiable};
pub use repository::{like, CrudRepository, CustomerRepository, RepositoryError};
pub use sequence::IdentifierSequence;
pub use service::{CustomerService, UpsertService};

#[cfg(feature = "emitter")]
pub use emitter::EmittingRepository;

#[cfg(feature = "http")]
pub use service::http;

// Re-export the derive macro
pub use crud_service_macros::Identifiable;

// Re-export the configuration error so callers need not depend on `config`
pub use ::config::ConfigError;
