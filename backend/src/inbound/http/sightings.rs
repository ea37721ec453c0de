//! Sighting HTTP handlers.
//!
//! ```text
//! POST /sightings                    (multipart/form-data)
//! GET  /sightings/{id}
//! GET  /dive-entries/{id}/sightings
//! ```
//!
//! Uploads are read fully into memory before the service runs, so a missing
//! dive entry is detected before any bytes reach the upload directory.

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::UploadSightingRequest;
use crate::domain::{DiveEntryId, Error, Sighting, SightingId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_filename, parse_integer,
};

const DIVE_ENTRY_ID_FIELD: FieldName = FieldName::new("dive_entry_id");
const FILE_FIELD: FieldName = FieldName::new("file");

/// Largest accepted photo, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// A stored photo recorded against a dive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SightingResponseBody {
    pub id: i64,
    pub dive_entry_id: i64,
    #[schema(example = "nudibranch.jpg")]
    pub filename: String,
    #[schema(example = "uploads/nudibranch.jpg")]
    pub file_path: String,
}

impl From<Sighting> for SightingResponseBody {
    fn from(sighting: Sighting) -> Self {
        Self {
            id: sighting.id.get(),
            dive_entry_id: sighting.dive_entry_id.get(),
            filename: sighting.filename,
            file_path: sighting.file_path,
        }
    }
}

/// Multipart form accepted by the upload endpoint. Documentation only.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UploadSightingForm {
    /// Identifier of an existing dive entry.
    #[schema(example = 1)]
    dive_entry_id: i64,
    /// Photo bytes; the part's filename is kept as the stored name.
    #[schema(format = Binary)]
    file: String,
}

fn map_multipart_error(error: MultipartError) -> Error {
    debug!(%error, "rejected multipart body");
    Error::invalid_request(format!("invalid multipart body: {error}"))
}

async fn read_field(field: &mut Field, name: FieldName, limit: usize) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(map_multipart_error)? {
        if buf.len() + chunk.len() > limit {
            return Err(Error::invalid_request(format!(
                "{} exceeds {limit} bytes",
                name.as_str()
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Collect the upload form parts, ignoring unknown fields.
async fn read_upload_form(payload: &mut Multipart) -> Result<UploadSightingRequest, Error> {
    let mut dive_entry_id = None;
    let mut file = None;

    while let Some(mut field) = payload.try_next().await.map_err(map_multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(name) if name == DIVE_ENTRY_ID_FIELD.as_str() => {
                let raw = read_field(&mut field, DIVE_ENTRY_ID_FIELD, 64).await?;
                let text = String::from_utf8_lossy(&raw).into_owned();
                let id = parse_integer(&text, DIVE_ENTRY_ID_FIELD)?;
                dive_entry_id = Some(DiveEntryId::new(id));
            }
            Some(name) if name == FILE_FIELD.as_str() => {
                let raw_name = field
                    .content_disposition()
                    .and_then(|disposition| disposition.get_filename())
                    .map(str::to_owned)
                    .ok_or_else(|| missing_field_error(FieldName::new("file.filename")))?;
                let filename = parse_filename(&raw_name, FILE_FIELD)?;
                let bytes = read_field(&mut field, FILE_FIELD, MAX_UPLOAD_BYTES).await?;
                file = Some((filename, bytes));
            }
            _ => {
                while field.try_next().await.map_err(map_multipart_error)?.is_some() {}
            }
        }
    }

    let dive_entry_id = dive_entry_id.ok_or_else(|| missing_field_error(DIVE_ENTRY_ID_FIELD))?;
    let (filename, bytes) = file.ok_or_else(|| missing_field_error(FILE_FIELD))?;
    Ok(UploadSightingRequest {
        dive_entry_id,
        filename,
        bytes,
    })
}

/// Upload a photo for an existing dive entry.
#[utoipa::path(
    post,
    path = "/sightings",
    request_body(content = UploadSightingForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Sighting recorded", body = SightingResponseBody),
        (status = 400, description = "Missing or invalid form field", body = ErrorSchema),
        (status = 404, description = "Dive entry not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["sightings"],
    operation_id = "uploadSighting"
)]
#[post("/sightings")]
pub async fn upload_sighting(
    state: web::Data<HttpState>,
    mut payload: Multipart,
) -> ApiResult<HttpResponse> {
    let request = read_upload_form(&mut payload).await?;
    let sighting = state.sightings.upload_sighting(request).await?;
    Ok(HttpResponse::Created().json(SightingResponseBody::from(sighting)))
}

/// Fetch one sighting.
#[utoipa::path(
    get,
    path = "/sightings/{id}",
    params(("id" = i64, Path, description = "Sighting identifier")),
    responses(
        (status = 200, description = "Sighting", body = SightingResponseBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Sighting not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["sightings"],
    operation_id = "getSighting"
)]
#[get("/sightings/{id}")]
pub async fn get_sighting(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<SightingResponseBody>> {
    let sighting = state
        .sightings_query
        .get_sighting(SightingId::new(path.into_inner()))
        .await?;
    Ok(web::Json(SightingResponseBody::from(sighting)))
}

/// List the sightings of one dive entry in upload order.
#[utoipa::path(
    get,
    path = "/dive-entries/{id}/sightings",
    params(("id" = i64, Path, description = "Dive entry identifier")),
    responses(
        (status = 200, description = "Sightings of the dive entry", body = [SightingResponseBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Dive entry not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["sightings"],
    operation_id = "listSightingsForDiveEntry"
)]
#[get("/dive-entries/{id}/sightings")]
pub async fn list_sightings_for_dive_entry(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<SightingResponseBody>>> {
    let sightings = state
        .sightings_query
        .list_sightings_for_dive_entry(DiveEntryId::new(path.into_inner()))
        .await?;
    Ok(web::Json(
        sightings
            .into_iter()
            .map(SightingResponseBody::from)
            .collect(),
    ))
}

#[cfg(test)]
#[path = "sightings_tests.rs"]
mod tests;
