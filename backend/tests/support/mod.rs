//! Shared helper utilities for backend integration tests.
//!
//! Each test gets its own SQLite file and upload directory inside a
//! temporary directory, migrated and wired to the real adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use nudilog::Trace;
use nudilog::domain::{DiveEntryService, SightingService};
use nudilog::inbound::http::configure;
use nudilog::inbound::http::state::HttpState;
use nudilog::outbound::persistence::{
    DbPool, DieselDiveEntryRepository, DieselSightingRepository, PoolConfig, run_migrations,
};
use nudilog::outbound::storage::CapStdPhotoStore;
use tempfile::TempDir;

const BOUNDARY: &str = "nudilog-integration-boundary";

/// Temporary database and upload directory for one test.
pub struct TestEnv {
    dir: TempDir,
    pub pool: DbPool,
    pub photo_store: CapStdPhotoStore,
}

impl TestEnv {
    /// Create a migrated database and an empty upload directory.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let database_url = database_path(dir.path());
        run_migrations(&database_url).expect("migrations apply");
        let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(2))
            .await
            .expect("pool builds");
        let photo_store =
            CapStdPhotoStore::open(dir.path().join("uploads")).expect("upload dir opens");
        Self {
            dir,
            pool,
            photo_store,
        }
    }

    /// Directory uploaded photos land in.
    pub fn upload_dir(&self) -> PathBuf {
        self.photo_store.base().to_path_buf()
    }

    /// Names of every file currently in the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir())
            .expect("read upload dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    pub fn dive_entry_repository(&self) -> DieselDiveEntryRepository {
        DieselDiveEntryRepository::new(self.pool.clone())
    }

    pub fn sighting_repository(&self) -> DieselSightingRepository {
        DieselSightingRepository::new(self.pool.clone())
    }

    /// HTTP state backed by the real services and adapters.
    pub fn http_state(&self) -> web::Data<HttpState> {
        let dive_entry_repo = Arc::new(self.dive_entry_repository());
        let dive_entries = Arc::new(DiveEntryService::new(Arc::clone(&dive_entry_repo)));
        let sightings = Arc::new(SightingService::new(
            dive_entry_repo,
            Arc::new(self.sighting_repository()),
            Arc::new(self.photo_store.clone()),
        ));
        web::Data::new(HttpState::new(
            dive_entries.clone(),
            dive_entries,
            sightings.clone(),
            sightings,
        ))
    }

    /// Application serving every dive log endpoint.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.http_state())
            .wrap(Trace)
            .configure(configure)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Path of the SQLite file used inside `dir`.
pub fn database_path(dir: &Path) -> String {
    dir.join("nudilog.db")
        .to_str()
        .expect("utf-8 temp path")
        .to_owned()
}

/// Content type announcing the boundary used by [`upload_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Build a sighting upload form with one text field and one file part.
pub fn upload_body(dive_entry_id: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"dive_entry_id\"\r\n\r\n\
             {dive_entry_id}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}
