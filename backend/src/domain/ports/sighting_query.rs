//! Driving port for sighting reads.

use async_trait::async_trait;

use crate::domain::{DiveEntryId, Error, Sighting, SightingId};

/// Driving port for sighting read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SightingQuery: Send + Sync {
    /// Fetch one sighting. Fails with `not_found` when absent.
    async fn get_sighting(&self, id: SightingId) -> Result<Sighting, Error>;

    /// List the sightings of a dive entry in creation order.
    ///
    /// Fails with `not_found` when the dive entry itself does not exist.
    async fn list_sightings_for_dive_entry(
        &self,
        dive_entry_id: DiveEntryId,
    ) -> Result<Vec<Sighting>, Error>;
}
