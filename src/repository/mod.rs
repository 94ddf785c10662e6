mod crud;
mod customer;
mod error;
pub mod like;

pub use crud::CrudRepository;
pub use customer::CustomerRepository;
pub use error::RepositoryError;
