//! Port for storing uploaded photo bytes.

use async_trait::async_trait;

use crate::domain::PhotoFilename;

use super::define_port_error;

define_port_error! {
    /// Errors raised by photo store adapters.
    pub enum PhotoStoreError {
        /// Writing the file failed.
        Io { message: String } => "photo store write failed: {message}",
    }
}

/// Location of a stored photo, as recorded on the sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub file_path: String,
}

/// Port for writing photo bytes under their sanitised filename.
///
/// Storing a name that already exists replaces the previous contents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Persist `bytes` and return where they were written.
    async fn store(
        &self,
        filename: &PhotoFilename,
        bytes: Vec<u8>,
    ) -> Result<StoredPhoto, PhotoStoreError>;
}
