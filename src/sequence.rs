use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ServiceError;

/// Monotonic identifier source owned by a service instance.
///
/// `next` is an atomic pre-increment: a fresh sequence issues 1 first.
/// Concurrent callers never observe the same value, and once `u64::MAX` has
/// been issued every further call fails instead of wrapping.
#[derive(Debug, Default)]
pub struct IdentifierSequence {
    value: AtomicU64,
}

impl IdentifierSequence {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A sequence whose first issued value is `start + 1`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            value: AtomicU64::new(start),
        }
    }

    pub fn next(&self) -> Result<u64, ServiceError> {
        self.value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |value| value.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|_| ServiceError::illegal_state("identifier sequence is exhausted"))
    }

    /// The last issued value, or the starting value if none was issued.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
