//! SQLite-backed `SightingRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SightingRepository, SightingRepositoryError};
use crate::domain::{DiveEntryId, NewSighting, Sighting, SightingId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_dive_entry_repository::row_to_sighting;
use super::models::{NewSightingRow, SightingRow};
use super::pool::{DbPool, PoolError};
use super::schema::sightings;

/// Diesel-backed implementation of the sighting repository port.
#[derive(Clone)]
pub struct DieselSightingRepository {
    pool: DbPool,
}

impl DieselSightingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SightingRepositoryError {
    map_basic_pool_error(error, SightingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SightingRepositoryError {
    map_basic_diesel_error(
        error,
        SightingRepositoryError::query,
        SightingRepositoryError::connection,
    )
}

#[async_trait]
impl SightingRepository for DieselSightingRepository {
    async fn create(&self, sighting: &NewSighting) -> Result<Sighting, SightingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewSightingRow {
            dive_entry_id: sighting.dive_entry_id.get(),
            filename: sighting.filename.as_str(),
            file_path: &sighting.file_path,
        };

        diesel::insert_into(sightings::table)
            .values(&new_row)
            .returning(SightingRow::as_returning())
            .get_result::<SightingRow>(&mut conn)
            .await
            .map(row_to_sighting)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: SightingId,
    ) -> Result<Option<Sighting>, SightingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        sightings::table
            .find(id.get())
            .select(SightingRow::as_select())
            .first::<SightingRow>(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_sighting))
            .map_err(map_diesel_error)
    }

    async fn list_for_dive_entry(
        &self,
        dive_entry_id: DiveEntryId,
    ) -> Result<Vec<Sighting>, SightingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SightingRow> = sightings::table
            .filter(sightings::dive_entry_id.eq(dive_entry_id.get()))
            .order(sightings::id.asc())
            .select(SightingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_sighting).collect())
    }
}
