//! `PhotoStore` adapter writing into a single upload directory.
//!
//! The directory is opened once as a `cap_std::fs::Dir`, so every write is
//! resolved relative to it and cannot escape it even if a name slipped past
//! sanitisation.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::domain::{PhotoFilename, TraceId};
use crate::domain::ports::{PhotoStore, PhotoStoreError, StoredPhoto};

/// Photo store confined to one directory.
#[derive(Clone)]
pub struct CapStdPhotoStore {
    dir: Arc<Dir>,
    base: PathBuf,
}

impl CapStdPhotoStore {
    /// Create `upload_dir` if needed and open it for writing.
    ///
    /// Recorded file paths are `upload_dir` joined with the stored name.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be created
    /// or opened.
    pub fn open(upload_dir: impl AsRef<Path>) -> io::Result<Self> {
        let base = upload_dir.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&base, ambient_authority())?;
        let dir = Dir::open_ambient_dir(&base, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            base,
        })
    }

    /// Directory every photo is written into.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

fn map_io_error(error: io::Error) -> PhotoStoreError {
    debug!(kind = ?error.kind(), %error, "photo write failed");
    PhotoStoreError::io(error.to_string())
}

#[async_trait]
impl PhotoStore for CapStdPhotoStore {
    async fn store(
        &self,
        filename: &PhotoFilename,
        bytes: Vec<u8>,
    ) -> Result<StoredPhoto, PhotoStoreError> {
        let dir = Arc::clone(&self.dir);
        let name = filename.as_str().to_owned();

        let write = TraceId::bind_blocking(move || {
            debug!(
                trace_id = ?TraceId::current(),
                file = %name,
                size = bytes.len(),
                "writing photo"
            );
            dir.write(&name, bytes)
        });
        tokio::task::spawn_blocking(write)
            .await
            .map_err(|err| PhotoStoreError::io(format!("write task failed: {err}")))?
            .map_err(map_io_error)?;

        Ok(StoredPhoto {
            file_path: self.base.join(filename.as_str()).to_string_lossy().into_owned(),
        })
    }
}
