//! Driving port for photo uploads.

use async_trait::async_trait;

use crate::domain::{DiveEntryId, Error, PhotoFilename, Sighting};

/// An uploaded photo destined for an existing dive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSightingRequest {
    pub dive_entry_id: DiveEntryId,
    pub filename: PhotoFilename,
    pub bytes: Vec<u8>,
}

/// Driving port for sighting writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SightingCommand: Send + Sync {
    /// Store the photo and record a sighting for it.
    ///
    /// Fails with `not_found` before touching storage when the dive entry
    /// does not exist.
    async fn upload_sighting(&self, request: UploadSightingRequest) -> Result<Sighting, Error>;
}
