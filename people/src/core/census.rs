//! Explicit population counter shared by every person constructor.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts every person constructed against it, across all roles.
///
/// The count is monotonic: dropping a person never decrements it.
#[derive(Debug, Default)]
pub struct Census {
    created: AtomicU64,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one construction and return the population after it.
    pub(crate) fn record(&self) -> u64 {
        self.created.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of people constructed against this census so far.
    pub fn population(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }
}
