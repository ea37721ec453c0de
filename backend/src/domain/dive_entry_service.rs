//! Dive entry domain service.
//!
//! Implements the dive entry driving ports on top of the repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    DiveEntryCommand, DiveEntryQuery, DiveEntryRepository, DiveEntryRepositoryError,
};
use crate::domain::{DiveEntry, DiveEntryId, Error, NewDiveEntry};

pub(crate) fn map_dive_entry_repository_error(error: DiveEntryRepositoryError) -> Error {
    match error {
        DiveEntryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("dive entry repository unavailable: {message}"))
        }
        DiveEntryRepositoryError::Query { message } => {
            Error::internal(format!("dive entry repository error: {message}"))
        }
    }
}

pub(crate) fn dive_entry_not_found(id: DiveEntryId) -> Error {
    Error::not_found(format!("dive entry {id} not found"))
}

/// Service implementing [`DiveEntryCommand`] and [`DiveEntryQuery`].
#[derive(Clone)]
pub struct DiveEntryService<R> {
    dive_entry_repo: Arc<R>,
}

impl<R> DiveEntryService<R> {
    /// Create a new service with the dive entry repository.
    pub fn new(dive_entry_repo: Arc<R>) -> Self {
        Self { dive_entry_repo }
    }
}

#[async_trait]
impl<R> DiveEntryCommand for DiveEntryService<R>
where
    R: DiveEntryRepository,
{
    async fn create_dive_entry(&self, entry: NewDiveEntry) -> Result<DiveEntry, Error> {
        let created = self
            .dive_entry_repo
            .create(&entry)
            .await
            .map_err(map_dive_entry_repository_error)?;
        info!(
            dive_entry_id = %created.id,
            location = %created.location_name,
            "dive entry created"
        );
        Ok(created)
    }
}

#[async_trait]
impl<R> DiveEntryQuery for DiveEntryService<R>
where
    R: DiveEntryRepository,
{
    async fn get_dive_entry(&self, id: DiveEntryId) -> Result<DiveEntry, Error> {
        self.dive_entry_repo
            .find_by_id(id)
            .await
            .map_err(map_dive_entry_repository_error)?
            .ok_or_else(|| dive_entry_not_found(id))
    }

    async fn list_dive_entries(&self) -> Result<Vec<DiveEntry>, Error> {
        self.dive_entry_repo
            .list_all()
            .await
            .map_err(map_dive_entry_repository_error)
    }
}

#[cfg(test)]
#[path = "dive_entry_service_tests.rs"]
mod tests;
