//! HashMapRepository - in-memory repository for testing and development.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::model::{Customer, Identifiable};
use crate::repository::{CrudRepository, CustomerRepository, RepositoryError};

/// In-memory repository backed by an ordered map of encoded entities.
///
/// Entities are stored bitcode-encoded, so a loaded entity is always a fresh
/// copy. Clone-friendly via Arc: clones share storage.
pub struct HashMapRepository<M> {
    storage: Arc<RwLock<BTreeMap<u64, Vec<u8>>>>,
    _marker: PhantomData<fn() -> M>,
}

impl<M> HashMapRepository<M> {
    pub fn new() -> Self {
        HashMapRepository {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            _marker: PhantomData,
        }
    }
}

impl<M> Default for HashMapRepository<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for HashMapRepository<M> {
    fn clone(&self) -> Self {
        HashMapRepository {
            storage: Arc::clone(&self.storage),
            _marker: PhantomData,
        }
    }
}

impl<M> fmt::Debug for HashMapRepository<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.storage.read().map(|s| s.len()).ok();
        f.debug_struct("HashMapRepository")
            .field("entities", &len)
            .finish()
    }
}

impl<M: Identifiable> HashMapRepository<M> {
    fn decode(bytes: &[u8]) -> Result<M, RepositoryError> {
        Ok(bitcode::deserialize(bytes)?)
    }
}

impl<M: Identifiable> CrudRepository<M> for HashMapRepository<M> {
    fn save(&self, entity: M) -> Result<M, RepositoryError> {
        let id = entity.id().ok_or(RepositoryError::MissingIdentity {
            collection: M::COLLECTION,
        })?;
        let bytes = bitcode::serialize(&entity)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        storage.insert(id, bytes);
        trace!(collection = M::COLLECTION, id, "stored entity");

        Ok(entity)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<M>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        storage.get(&id).map(|bytes| Self::decode(bytes)).transpose()
    }

    fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        self.find(&|_| true)
    }

    fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        let mut found = Vec::new();
        for bytes in storage.values() {
            let entity = Self::decode(bytes)?;
            if predicate(&entity) {
                found.push(entity);
            }
        }
        Ok(found)
    }

    fn find_one(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        for bytes in storage.values() {
            let entity = Self::decode(bytes)?;
            if predicate(&entity) {
                return Ok(Some(entity));
            }
        }
        Ok(None)
    }

    fn exists_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.contains_key(&id))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.len())
    }

    fn delete_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        Ok(storage.remove(&id).is_some())
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let removed = storage.len();
        storage.clear();
        Ok(removed)
    }
}

impl CustomerRepository for HashMapRepository<Customer> {}
