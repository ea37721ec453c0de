//! Driving port for dive entry reads.
//!
//! Inbound adapters use this port to read dive entries with their sightings
//! already materialised.

use async_trait::async_trait;

use crate::domain::{DiveEntry, DiveEntryId, Error};

/// Driving port for dive entry read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiveEntryQuery: Send + Sync {
    /// Fetch one dive entry. Fails with `not_found` when absent.
    async fn get_dive_entry(&self, id: DiveEntryId) -> Result<DiveEntry, Error>;

    /// Fetch every dive entry in storage order.
    async fn list_dive_entries(&self) -> Result<Vec<DiveEntry>, Error>;
}
