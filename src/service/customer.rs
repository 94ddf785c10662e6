use std::ops::Deref;

use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::model::Customer;
use crate::repository::CustomerRepository;
use crate::sequence::IdentifierSequence;

use super::upsert::UpsertService;

type Inner<R> = UpsertService<Customer, R>;

/// Application service for managing customers.
///
/// Derefs to [`UpsertService`] for `save`, `find_by_id` and the other
/// generic operations; adds name lookups on top.
#[derive(Debug)]
pub struct CustomerService<R> {
    inner: Inner<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            inner: UpsertService::new(repository),
        }
    }

    pub fn with_sequence(repository: R, sequence: IdentifierSequence) -> Self {
        Self {
            inner: UpsertService::with_sequence(repository, sequence),
        }
    }

    pub fn from_config(repository: R, config: &ServiceConfig) -> Self {
        Self {
            inner: UpsertService::from_config(repository, config),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            inner: UpsertService::unconfigured(),
        }
    }

    /// Look up a customer by exact name.
    pub fn find_by(&self, name: &str) -> Result<Option<Customer>, ServiceError> {
        let found = self.inner.repository()?.find_by_name(name)?;
        debug!(name, found = found.is_some(), "find customer by name");
        Ok(found)
    }

    /// Look up a customer by `LIKE` pattern (`%` any run, `_` one character).
    pub fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>, ServiceError> {
        let found = self.inner.repository()?.find_by_name_like(pattern)?;
        debug!(pattern, found = found.is_some(), "find customer by name pattern");
        Ok(found)
    }
}

impl<R> Deref for CustomerService<R> {
    type Target = Inner<R>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
