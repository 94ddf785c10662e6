//! Repository integration tests.
//!
//! - In-memory repository through the public traits
//! - `#[derive(Identifiable)]` on user-defined entities
//! - Lifecycle events from the emitting decorator

mod derive;
#[cfg(feature = "emitter")]
mod emitter;
