//! Dive entry HTTP handlers.
//!
//! ```text
//! POST /dive-entries
//! GET  /dive-entries
//! GET  /dive-entries/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DiveEntry, DiveEntryId, Error, NewDiveEntry};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::sightings::SightingResponseBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_timestamp};

/// Request payload for logging a dive.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateDiveEntryRequestBody {
    /// RFC 3339 timestamp; one without an offset is read as UTC.
    #[schema(format = "date-time", example = "2024-05-01T10:00:00Z")]
    pub dive_date: String,
    #[schema(example = "Blue Hole")]
    pub location_name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Average depth in metres.
    #[serde(default)]
    pub av_depth_m: Option<f64>,
    /// Average water temperature in degrees Celsius.
    #[serde(default)]
    pub av_water_temp_c: Option<f64>,
    #[serde(default)]
    pub habitat: Option<String>,
}

/// A dive entry with every sighting recorded against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiveEntryResponseBody {
    pub id: i64,
    #[schema(format = "date-time", example = "2024-05-01T10:00:00Z")]
    pub dive_date: String,
    pub location_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub av_depth_m: Option<f64>,
    pub av_water_temp_c: Option<f64>,
    pub habitat: Option<String>,
    pub sightings: Vec<SightingResponseBody>,
}

pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<DiveEntry> for DiveEntryResponseBody {
    fn from(entry: DiveEntry) -> Self {
        Self {
            id: entry.id.get(),
            dive_date: format_timestamp(entry.dive_date),
            location_name: entry.location_name,
            lat: entry.lat,
            lon: entry.lon,
            av_depth_m: entry.av_depth_m,
            av_water_temp_c: entry.av_water_temp_c,
            habitat: entry.habitat,
            sightings: entry
                .sightings
                .into_iter()
                .map(SightingResponseBody::from)
                .collect(),
        }
    }
}

fn parse_new_dive_entry(payload: CreateDiveEntryRequestBody) -> Result<NewDiveEntry, Error> {
    Ok(NewDiveEntry {
        dive_date: parse_timestamp(&payload.dive_date, FieldName::new("dive_date"))?,
        location_name: payload.location_name,
        lat: payload.lat,
        lon: payload.lon,
        av_depth_m: payload.av_depth_m,
        av_water_temp_c: payload.av_water_temp_c,
        habitat: payload.habitat,
    })
}

/// Log a new dive.
#[utoipa::path(
    post,
    path = "/dive-entries",
    request_body = CreateDiveEntryRequestBody,
    responses(
        (status = 201, description = "Dive entry created", body = DiveEntryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dive-entries"],
    operation_id = "createDiveEntry"
)]
#[post("/dive-entries")]
pub async fn create_dive_entry(
    state: web::Data<HttpState>,
    payload: web::Json<CreateDiveEntryRequestBody>,
) -> ApiResult<HttpResponse> {
    let entry = parse_new_dive_entry(payload.into_inner())?;
    let created = state.dive_entries.create_dive_entry(entry).await?;
    Ok(HttpResponse::Created().json(DiveEntryResponseBody::from(created)))
}

/// List every dive entry with its sightings, oldest first.
#[utoipa::path(
    get,
    path = "/dive-entries",
    responses(
        (status = 200, description = "All dive entries", body = [DiveEntryResponseBody]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dive-entries"],
    operation_id = "listDiveEntries"
)]
#[get("/dive-entries")]
pub async fn list_dive_entries(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DiveEntryResponseBody>>> {
    let entries = state.dive_entries_query.list_dive_entries().await?;
    Ok(web::Json(
        entries.into_iter().map(DiveEntryResponseBody::from).collect(),
    ))
}

/// Fetch one dive entry with its sightings.
#[utoipa::path(
    get,
    path = "/dive-entries/{id}",
    params(("id" = i64, Path, description = "Dive entry identifier")),
    responses(
        (status = 200, description = "Dive entry", body = DiveEntryResponseBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Dive entry not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dive-entries"],
    operation_id = "getDiveEntry"
)]
#[get("/dive-entries/{id}")]
pub async fn get_dive_entry(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DiveEntryResponseBody>> {
    let id = DiveEntryId::new(path.into_inner());
    let entry = state.dive_entries_query.get_dive_entry(id).await?;
    Ok(web::Json(DiveEntryResponseBody::from(entry)))
}

#[cfg(test)]
#[path = "dive_entries_tests.rs"]
mod tests;
