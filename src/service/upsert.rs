use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::model::Identifiable;
use crate::repository::CrudRepository;
use crate::sequence::IdentifierSequence;

/// A service that assigns identities to new entities before storing them.
///
/// The repository is optional so that a service built without one
/// ([`UpsertService::unconfigured`]) fails fast on first use instead of
/// at construction.
pub struct UpsertService<M, R> {
    repository: Option<R>,
    sequence: IdentifierSequence,
    _marker: PhantomData<fn() -> M>,
}

impl<M, R> UpsertService<M, R>
where
    M: Identifiable,
    R: CrudRepository<M>,
{
    /// Create a service whose first assigned identity is 1.
    pub fn new(repository: R) -> Self {
        Self::with_sequence(repository, IdentifierSequence::new())
    }

    pub fn with_sequence(repository: R, sequence: IdentifierSequence) -> Self {
        Self {
            repository: Some(repository),
            sequence,
            _marker: PhantomData,
        }
    }

    /// Create a service seeded from `identifier.start`.
    pub fn from_config(repository: R, config: &ServiceConfig) -> Self {
        Self::with_sequence(
            repository,
            IdentifierSequence::starting_at(config.identifier.start),
        )
    }

    /// A service with no repository. Every repository-backed operation fails
    /// with [`ServiceError::IllegalState`].
    pub fn unconfigured() -> Self {
        Self {
            repository: None,
            sequence: IdentifierSequence::new(),
            _marker: PhantomData,
        }
    }

    /// Get the repository, failing if it was never configured.
    pub fn repository(&self) -> Result<&R, ServiceError> {
        self.repository.as_ref().ok_or_else(|| {
            let message = format!("{}Repository was not properly configured", entity_name::<M>());
            warn!(collection = M::COLLECTION, "{}", message);
            ServiceError::IllegalState(message)
        })
    }

    pub fn sequence(&self) -> &IdentifierSequence {
        &self.sequence
    }

    /// Draw the next identity. Fails once the sequence is exhausted.
    pub fn next_id(&self) -> Result<u64, ServiceError> {
        self.sequence.next().map_err(|err| {
            warn!(collection = M::COLLECTION, "{}", err);
            err
        })
    }

    /// Save an entity, assigning the next identity if it is new.
    ///
    /// Accepts `M` or `Option<M>`; `None` fails with
    /// [`ServiceError::IllegalState`] without touching the repository.
    /// The repository guard runs before an identity is drawn, so a save on
    /// an unconfigured service does not consume one.
    pub fn save(&self, entity: impl Into<Option<M>>) -> Result<M, ServiceError> {
        let Some(entity) = entity.into() else {
            let message = format!("{} is required", entity_name::<M>());
            warn!(collection = M::COLLECTION, "{}", message);
            return Err(ServiceError::IllegalState(message));
        };

        let repository = self.repository()?;

        let entity = if entity.is_new() {
            let id = self.next_id()?;
            debug!(collection = M::COLLECTION, id, "assigned identity to new entity");
            entity.identified_by(id)
        } else {
            entity
        };

        let saved = repository.save(entity)?;
        debug!(collection = M::COLLECTION, id = ?saved.id(), "saved entity");
        Ok(saved)
    }

    pub fn find_by_id(&self, id: u64) -> Result<Option<M>, ServiceError> {
        Ok(self.repository()?.find_by_id(id)?)
    }

    pub fn find_all(&self) -> Result<Vec<M>, ServiceError> {
        Ok(self.repository()?.find_all()?)
    }

    pub fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.repository()?.count()?)
    }

    /// Delete an entity by ID. Returns true if it existed.
    pub fn delete_by_id(&self, id: u64) -> Result<bool, ServiceError> {
        let deleted = self.repository()?.delete_by_id(id)?;
        debug!(collection = M::COLLECTION, id, deleted, "delete by id");
        Ok(deleted)
    }
}

impl<M, R> fmt::Debug for UpsertService<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpsertService")
            .field("configured", &self.repository.is_some())
            .field("sequence", &self.sequence)
            .finish()
    }
}

/// Unqualified type name without generics, e.g. `Customer`.
fn entity_name<M>() -> &'static str {
    let full = type_name::<M>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
