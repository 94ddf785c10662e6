//! Recording repository for observing what the service forwards.

use std::collections::HashMap;
use std::sync::Mutex;

use crud_service::{CrudRepository, Customer, CustomerRepository, Identifiable, RepositoryError};

/// Repository that records every call and answers name lookups from a
/// fixed table.
#[derive(Default)]
pub struct RecordingRepository {
    saved: Mutex<Vec<Customer>>,
    name_lookups: Mutex<Vec<String>>,
    by_name: HashMap<String, Customer>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `find_by_name(customer.name())` with `customer`.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.by_name.insert(customer.name().to_string(), customer);
        self
    }

    pub fn saved(&self) -> Vec<Customer> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn name_lookups(&self) -> Vec<String> {
        self.name_lookups.lock().unwrap().clone()
    }
}

impl CrudRepository<Customer> for RecordingRepository {
    fn save(&self, entity: Customer) -> Result<Customer, RepositoryError> {
        self.saved.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.id() == Some(id))
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.saved())
    }

    fn find(&self, predicate: &dyn Fn(&Customer) -> bool) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.saved().into_iter().filter(|c| predicate(c)).collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.save_calls())
    }

    fn delete_by_id(&self, _id: u64) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut saved = self.saved.lock().unwrap();
        let removed = saved.len();
        saved.clear();
        Ok(removed)
    }
}

impl CustomerRepository for RecordingRepository {
    fn find_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        self.name_lookups.lock().unwrap().push(name.to_string());
        Ok(self.by_name.get(name).cloned())
    }
}
