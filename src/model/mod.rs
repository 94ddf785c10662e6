//! Models - entities with an optional numeric identity.
//!
//! An entity without an identity is *new*. Assigning an identity never
//! mutates the entity in place: `identified_by` returns a copy.
//!
//! ## Example
//!
//! ```ignore
//! use crud_service::Identifiable;
//!
//! #[derive(Serialize, Deserialize, Clone, Identifiable)]
//! #[identifiable(collection = "orders")]
//! struct Order {
//!     id: Option<u64>,
//!     total: u64,
//! }
//!
//! let order = Order { id: None, total: 10 };
//! assert!(order.is_new());
//! assert_eq!(order.identified_by(7).id(), Some(7));
//! ```
//!
//! ## Attribute errors
//!
//! The derive rejects attributes it does not understand rather than falling
//! back to defaults:
//!
//! ```
//! use crud_service::Identifiable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Clone, Identifiable)]
//! #[identifiable(collection = "orders")]
//! struct Order {
//!     id: Option<u64>,
//! }
//!
//! assert_eq!(Order::COLLECTION, "orders");
//! ```
//!
//! A misspelled key:
//!
//! ```compile_fail
//! use crud_service::Identifiable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Clone, Identifiable)]
//! #[identifiable(colection = "orders")]
//! struct Order {
//!     id: Option<u64>,
//! }
//! ```
//!
//! A collection that is not a string literal:
//!
//! ```compile_fail
//! use crud_service::Identifiable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Clone, Identifiable)]
//! #[identifiable(collection = 5)]
//! struct Order {
//!     id: Option<u64>,
//! }
//! ```

mod customer;

use serde::{de::DeserializeOwned, Serialize};

pub use customer::Customer;

/// Trait for entities a repository can store.
pub trait Identifiable: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this entity type (e.g., "customers").
    /// Maps to a region in a data grid, a table in SQL, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    /// Returns the identity, if one was assigned.
    fn id(&self) -> Option<u64>;

    /// An entity is new until it carries an identity.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Returns a copy of this entity carrying `id`.
    fn identified_by(&self, id: u64) -> Self;
}
