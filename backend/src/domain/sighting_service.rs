//! Sighting domain service.
//!
//! Uploads check the owning dive entry before any bytes reach the photo
//! store, so a rejected upload leaves neither a file nor a row behind.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::dive_entry_service::{dive_entry_not_found, map_dive_entry_repository_error};
use crate::domain::ports::{
    DiveEntryRepository, PhotoStore, PhotoStoreError, SightingCommand, SightingQuery,
    SightingRepository, SightingRepositoryError, UploadSightingRequest,
};
use crate::domain::{DiveEntryId, Error, NewSighting, Sighting, SightingId};

fn map_sighting_repository_error(error: SightingRepositoryError) -> Error {
    match error {
        SightingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("sighting repository unavailable: {message}"))
        }
        SightingRepositoryError::Query { message } => {
            Error::internal(format!("sighting repository error: {message}"))
        }
    }
}

fn map_photo_store_error(error: PhotoStoreError) -> Error {
    match error {
        PhotoStoreError::Io { message } => {
            Error::internal(format!("photo store error: {message}"))
        }
    }
}

/// Service implementing [`SightingCommand`] and [`SightingQuery`].
#[derive(Clone)]
pub struct SightingService<D, S, P> {
    dive_entry_repo: Arc<D>,
    sighting_repo: Arc<S>,
    photo_store: Arc<P>,
}

impl<D, S, P> SightingService<D, S, P> {
    /// Create a new service from its repositories and photo store.
    pub fn new(dive_entry_repo: Arc<D>, sighting_repo: Arc<S>, photo_store: Arc<P>) -> Self {
        Self {
            dive_entry_repo,
            sighting_repo,
            photo_store,
        }
    }
}

impl<D, S, P> SightingService<D, S, P>
where
    D: DiveEntryRepository,
{
    async fn ensure_dive_entry_exists(&self, id: DiveEntryId) -> Result<(), Error> {
        let exists = self
            .dive_entry_repo
            .exists(id)
            .await
            .map_err(map_dive_entry_repository_error)?;
        if exists {
            Ok(())
        } else {
            Err(dive_entry_not_found(id))
        }
    }
}

#[async_trait]
impl<D, S, P> SightingCommand for SightingService<D, S, P>
where
    D: DiveEntryRepository,
    S: SightingRepository,
    P: PhotoStore,
{
    async fn upload_sighting(&self, request: UploadSightingRequest) -> Result<Sighting, Error> {
        let UploadSightingRequest {
            dive_entry_id,
            filename,
            bytes,
        } = request;
        self.ensure_dive_entry_exists(dive_entry_id).await?;

        let size = bytes.len();
        let stored = self
            .photo_store
            .store(&filename, bytes)
            .await
            .map_err(map_photo_store_error)?;

        let sighting = self
            .sighting_repo
            .create(&NewSighting {
                dive_entry_id,
                filename,
                file_path: stored.file_path,
            })
            .await
            .map_err(map_sighting_repository_error)?;

        info!(
            sighting_id = %sighting.id,
            dive_entry_id = %sighting.dive_entry_id,
            file_path = %sighting.file_path,
            bytes = size,
            "sighting uploaded"
        );
        Ok(sighting)
    }
}

#[async_trait]
impl<D, S, P> SightingQuery for SightingService<D, S, P>
where
    D: DiveEntryRepository,
    S: SightingRepository,
    P: PhotoStore,
{
    async fn get_sighting(&self, id: SightingId) -> Result<Sighting, Error> {
        self.sighting_repo
            .find_by_id(id)
            .await
            .map_err(map_sighting_repository_error)?
            .ok_or_else(|| Error::not_found(format!("sighting {id} not found")))
    }

    async fn list_sightings_for_dive_entry(
        &self,
        dive_entry_id: DiveEntryId,
    ) -> Result<Vec<Sighting>, Error> {
        self.ensure_dive_entry_exists(dive_entry_id).await?;
        self.sighting_repo
            .list_for_dive_entry(dive_entry_id)
            .await
            .map_err(map_sighting_repository_error)
    }
}

#[cfg(test)]
#[path = "sighting_service_tests.rs"]
mod tests;
