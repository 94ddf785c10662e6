use std::error::Error;
use std::fmt;

use crate::repository::RepositoryError;

/// Error type for service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A precondition did not hold: a required entity was missing or the
    /// repository was never configured. Never recovered locally.
    IllegalState(String),
    /// The repository failed.
    Repository(RepositoryError),
}

impl ServiceError {
    pub fn illegal_state(message: impl Into<String>) -> Self {
        ServiceError::IllegalState(message.into())
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, ServiceError::IllegalState(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::IllegalState(message) => write!(f, "{}", message),
            ServiceError::Repository(e) => write!(f, "repository error: {}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Repository(e) => Some(e),
            ServiceError::IllegalState(_) => None,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Repository(err)
    }
}
