//! Driving port for logging dives.

use async_trait::async_trait;

use crate::domain::{DiveEntry, Error, NewDiveEntry};

/// Driving port for dive entry writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiveEntryCommand: Send + Sync {
    /// Record a new dive. The returned entry has no sightings yet.
    async fn create_dive_entry(&self, entry: NewDiveEntry) -> Result<DiveEntry, Error>;
}
