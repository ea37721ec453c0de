//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every dive log endpoint, the health checks, and the
//! error schemas. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::dive_entries::{CreateDiveEntryRequestBody, DiveEntryResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::sightings::{SightingResponseBody, UploadSightingForm};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nudilog API",
        description = "Log dives and the sighting photos taken on them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dive_entries::create_dive_entry,
        crate::inbound::http::dive_entries::list_dive_entries,
        crate::inbound::http::dive_entries::get_dive_entry,
        crate::inbound::http::sightings::upload_sighting,
        crate::inbound::http::sightings::get_sighting,
        crate::inbound::http::sightings::list_sightings_for_dive_entry,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateDiveEntryRequestBody,
        DiveEntryResponseBody,
        SightingResponseBody,
        UploadSightingForm,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "dive-entries", description = "Logged dives"),
        (name = "sightings", description = "Photos recorded against a dive"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
