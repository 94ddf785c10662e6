use std::sync::Arc;

use crate::model::Identifiable;

use super::error::RepositoryError;

/// CRUD storage for entities of one type, keyed by identity.
///
/// # Examples
///
/// ```ignore
/// let saved = repo.save(customer.identified_by(1))?;
/// let loaded = repo.find_by_id(1)?;
/// let janes = repo.find(&|c: &Customer| c.name() == "Jane")?;
/// ```
pub trait CrudRepository<M: Identifiable>: Send + Sync {
    /// Insert or replace the entity stored under its identity.
    ///
    /// Entities without an identity are rejected with
    /// [`RepositoryError::MissingIdentity`].
    fn save(&self, entity: M) -> Result<M, RepositoryError>;

    /// Get an entity by ID.
    fn find_by_id(&self, id: u64) -> Result<Option<M>, RepositoryError>;

    /// All entities in ascending identity order.
    fn find_all(&self) -> Result<Vec<M>, RepositoryError>;

    /// Find all entities matching a predicate, in ascending identity order.
    fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, RepositoryError>;

    /// Find the first entity matching a predicate.
    fn find_one(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>, RepositoryError> {
        Ok(self.find(predicate)?.into_iter().next())
    }

    fn exists_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn count(&self) -> Result<usize, RepositoryError>;

    /// Delete an entity by ID. Returns true if it existed.
    fn delete_by_id(&self, id: u64) -> Result<bool, RepositoryError>;

    /// Delete every entity, returning how many were removed.
    fn delete_all(&self) -> Result<usize, RepositoryError>;
}

impl<M, R> CrudRepository<M> for Arc<R>
where
    M: Identifiable,
    R: CrudRepository<M> + ?Sized,
{
    fn save(&self, entity: M) -> Result<M, RepositoryError> {
        (**self).save(entity)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<M>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        (**self).find_all()
    }

    fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, RepositoryError> {
        (**self).find(predicate)
    }

    fn find_one(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>, RepositoryError> {
        (**self).find_one(predicate)
    }

    fn exists_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        (**self).exists_by_id(id)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        (**self).count()
    }

    fn delete_by_id(&self, id: u64) -> Result<bool, RepositoryError> {
        (**self).delete_by_id(id)
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        (**self).delete_all()
    }
}
