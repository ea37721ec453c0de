//! SQLite-backed `DiveEntryRepository` implementation using Diesel ORM.
//!
//! Reads materialise each entry's sightings with a second query keyed on the
//! loaded entry ids, then regroup them per entry.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DiveEntryRepository, DiveEntryRepositoryError};
use crate::domain::{DiveEntry, DiveEntryId, NewDiveEntry, Sighting, SightingId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DiveEntryRow, NewDiveEntryRow, SightingRow};
use super::pool::{DbConnection, DbPool, PoolError};
use super::schema::{dive_entries, sightings};

/// Diesel-backed implementation of the dive entry repository port.
#[derive(Clone)]
pub struct DieselDiveEntryRepository {
    pool: DbPool,
}

impl DieselDiveEntryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DiveEntryRepositoryError {
    map_basic_pool_error(error, DiveEntryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DiveEntryRepositoryError {
    map_basic_diesel_error(
        error,
        DiveEntryRepositoryError::query,
        DiveEntryRepositoryError::connection,
    )
}

pub(super) fn row_to_sighting(row: SightingRow) -> Sighting {
    Sighting {
        id: SightingId::new(row.id),
        dive_entry_id: DiveEntryId::new(row.dive_entry_id),
        filename: row.filename,
        file_path: row.file_path,
    }
}

fn row_to_dive_entry(row: DiveEntryRow, sightings: Vec<SightingRow>) -> DiveEntry {
    let DiveEntryRow {
        id,
        dive_date,
        location_name,
        lat,
        lon,
        av_depth_m,
        av_water_temp_c,
        habitat,
    } = row;

    DiveEntry::from_parts(
        DiveEntryId::new(id),
        NewDiveEntry {
            dive_date: dive_date.and_utc(),
            location_name,
            lat,
            lon,
            av_depth_m,
            av_water_temp_c,
            habitat,
        },
        sightings.into_iter().map(row_to_sighting).collect(),
    )
}

/// Load the sightings of `rows` and pair each entry with its own.
async fn attach_sightings(
    conn: &mut DbConnection,
    rows: Vec<DiveEntryRow>,
) -> Result<Vec<DiveEntry>, DiveEntryRepositoryError> {
    let sighting_rows: Vec<SightingRow> = SightingRow::belonging_to(&rows)
        .select(SightingRow::as_select())
        .order(sightings::id.asc())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let grouped = sighting_rows.grouped_by(&rows);
    Ok(rows
        .into_iter()
        .zip(grouped)
        .map(|(row, sightings)| row_to_dive_entry(row, sightings))
        .collect())
}

#[async_trait]
impl DiveEntryRepository for DieselDiveEntryRepository {
    async fn create(&self, entry: &NewDiveEntry) -> Result<DiveEntry, DiveEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewDiveEntryRow {
            dive_date: entry.dive_date.naive_utc(),
            location_name: &entry.location_name,
            lat: entry.lat,
            lon: entry.lon,
            av_depth_m: entry.av_depth_m,
            av_water_temp_c: entry.av_water_temp_c,
            habitat: entry.habitat.as_deref(),
        };

        let row = diesel::insert_into(dive_entries::table)
            .values(&new_row)
            .returning(DiveEntryRow::as_returning())
            .get_result::<DiveEntryRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_dive_entry(row, Vec::new()))
    }

    async fn find_by_id(
        &self,
        id: DiveEntryId,
    ) -> Result<Option<DiveEntry>, DiveEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = dive_entries::table
            .find(id.get())
            .select(DiveEntryRow::as_select())
            .first::<DiveEntryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut entries = attach_sightings(&mut conn, vec![row]).await?;
        Ok(entries.pop())
    }

    async fn list_all(&self) -> Result<Vec<DiveEntry>, DiveEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DiveEntryRow> = dive_entries::table
            .order(dive_entries::id.asc())
            .select(DiveEntryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_sightings(&mut conn, rows).await
    }

    async fn exists(&self, id: DiveEntryId) -> Result<bool, DiveEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            dive_entries::table.filter(dive_entries::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}
