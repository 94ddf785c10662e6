use std::fmt;
use std::sync::{Mutex, PoisonError};

use event_emitter_rs::EventEmitter;
use tracing::warn;

use crate::model::{Customer, Identifiable};
use crate::repository::{CrudRepository, CustomerRepository, RepositoryError};

/// Event name emitted after an entity of `M` is saved.
pub fn saved_event<M: Identifiable>() -> String {
    format!("{}.saved", M::COLLECTION)
}

/// Event name emitted after an entity of `M` is deleted.
pub fn deleted_event<M: Identifiable>() -> String {
    format!("{}.deleted", M::COLLECTION)
}

/// Repository decorator that emits lifecycle events after successful writes.
///
/// Listeners run on the emitter's own threads, so they may observe the event
/// after the write call has returned.
pub struct EmittingRepository<R> {
    inner: R,
    emitter: Mutex<EventEmitter>,
}

impl<R> EmittingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener for an event name.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on(event, listener);
    }

    /// Get a reference to the wrapped repository.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap and return the wrapped repository.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn emit(&self, event: &str, payload: String) {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(event, payload);
            }
            Err(_) => warn!(event, "emitter lock poisoned; event dropped"),
        }
    }
}

impl<R> fmt::Debug for EmittingRepository<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmittingRepository")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<M, R> CrudRepository<M> for EmittingRepository<R>
where
    M: Identifiable,
    R: CrudRepository<M>,
{
    fn save(&self, entity: M) -> Result<M, RepositoryError> {
        let saved = self.inner.save(entity)?;
        match serde_json::to_string(&saved) {
            Ok(json) => self.emit(&saved_event::<M>(), json),
            Err(e) => warn!(collection = M::COLLECTION, error = %e, "could not encode saved event"),
        }
        Ok(saved)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<M>, RepositoryError> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        self.inner.find_all()
    }

    fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, RepositoryError> {
        self.inner.find(predicate)
    }

    fn find_one(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>, RepositoryError> {
        self.inner.find_one(predicate)
    }

    fn exists_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        self.inner.exists_by_id(id)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.inner.count()
    }

    fn delete_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        let deleted = self.inner.delete_by_id(id)?;
        if deleted {
            self.emit(&deleted_event::<M>(), id.to_string());
        }
        Ok(deleted)
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        self.inner.delete_all()
    }
}

impl<R: CustomerRepository> CustomerRepository for EmittingRepository<R> {
    fn find_by_name(&self, name: &str) -> Result<Option<Customer>, RepositoryError> {
        self.inner.find_by_name(name)
    }

    fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>, RepositoryError> {
        self.inner.find_by_name_like(pattern)
    }
}
