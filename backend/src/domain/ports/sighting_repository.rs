//! Port for sighting persistence.

use async_trait::async_trait;

use crate::domain::{DiveEntryId, NewSighting, Sighting, SightingId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by sighting repository adapters.
    pub enum SightingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "sighting repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "sighting repository query failed: {message}",
    }
}

/// Port for recording sightings and reading them back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SightingRepository: Send + Sync {
    /// Insert a sighting row. The owning dive entry must already exist.
    async fn create(&self, sighting: &NewSighting) -> Result<Sighting, SightingRepositoryError>;

    /// Find a sighting by id.
    async fn find_by_id(&self, id: SightingId)
    -> Result<Option<Sighting>, SightingRepositoryError>;

    /// Read the sightings of one dive entry in creation order.
    async fn list_for_dive_entry(
        &self,
        dive_entry_id: DiveEntryId,
    ) -> Result<Vec<Sighting>, SightingRepositoryError>;
}
