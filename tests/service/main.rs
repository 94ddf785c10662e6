//! Customer service integration tests.
//!
//! - Identity assignment for new entities, pass-through for existing ones
//! - Precondition failures (missing entity, unconfigured repository)
//! - Name lookups against a recording repository
//! - Concurrent saves from many threads

mod support;
mod upsert;
