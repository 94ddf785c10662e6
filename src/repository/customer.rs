use std::sync::Arc;

use crate::model::Customer;

use super::crud::CrudRepository;
use super::error::RepositoryError;
use super::like::LikePattern;

/// Customer storage with name queries.
///
/// Both queries default to a scan over [`CrudRepository::find_one`];
/// stores with a name index override them.
pub trait CustomerRepository: CrudRepository<Customer> {
    /// The first customer (by identity) whose name equals `name`.
    fn find_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        self.find_one(&|customer: &Customer| customer.name() == name)
    }

    /// The first customer (by identity) whose name matches the `LIKE` pattern.
    fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>, RepositoryError> {
        let pattern = LikePattern::new(pattern)?;
        self.find_one(&|customer: &Customer| pattern.is_match(customer.name()))
    }
}

impl<R: CustomerRepository + ?Sized> CustomerRepository for Arc<R> {
    fn find_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_name(name)
    }

    fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_name_like(pattern)
    }
}
