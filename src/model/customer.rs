use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Identifiable;

/// A named customer with an optional identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Identifiable)]
#[identifiable(collection = "customers")]
pub struct Customer {
    #[serde(default)]
    id: Option<u64>,
    name: String,
}

impl Customer {
    /// Create a new (unidentified) customer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({})", self.name, id),
            None => write!(f, "{} (new)", self.name),
        }
    }
}
