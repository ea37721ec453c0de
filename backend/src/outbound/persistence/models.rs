//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Repositories convert them into domain
//! types at the adapter boundary.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{dive_entries, sightings};

/// Row struct for reading from the dive_entries table.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = dive_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct DiveEntryRow {
    pub id: i64,
    pub dive_date: NaiveDateTime,
    pub location_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub av_depth_m: Option<f64>,
    pub av_water_temp_c: Option<f64>,
    pub habitat: Option<String>,
}

/// Insertable struct for logging a new dive.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = dive_entries)]
pub(crate) struct NewDiveEntryRow<'a> {
    pub dive_date: NaiveDateTime,
    pub location_name: &'a str,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub av_depth_m: Option<f64>,
    pub av_water_temp_c: Option<f64>,
    pub habitat: Option<&'a str>,
}

/// Row struct for reading from the sightings table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = sightings)]
#[diesel(belongs_to(DiveEntryRow, foreign_key = dive_entry_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct SightingRow {
    pub id: i64,
    pub dive_entry_id: i64,
    pub filename: String,
    pub file_path: String,
}

/// Insertable struct for recording a stored photo.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sightings)]
pub(crate) struct NewSightingRow<'a> {
    pub dive_entry_id: i64,
    pub filename: &'a str,
    pub file_path: &'a str,
}
