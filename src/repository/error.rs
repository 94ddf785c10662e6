use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    LockPoisoned(&'static str),
    /// The entity reached storage without an identity.
    MissingIdentity {
        collection: &'static str,
    },
    /// Encoding or decoding the stored representation failed.
    Codec(String),
    /// A `LIKE` pattern could not be compiled.
    InvalidPattern(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
            RepositoryError::MissingIdentity { collection } => {
                write!(f, "cannot store {} entity without an identity", collection)
            }
            RepositoryError::Codec(message) => write!(f, "codec error: {}", message),
            RepositoryError::InvalidPattern(message) => {
                write!(f, "invalid LIKE pattern: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<bitcode::Error> for RepositoryError {
    fn from(err: bitcode::Error) -> Self {
        RepositoryError::Codec(err.to_string())
    }
}

impl From<regex::Error> for RepositoryError {
    fn from(err: regex::Error) -> Self {
        RepositoryError::InvalidPattern(err.to_string())
    }
}
