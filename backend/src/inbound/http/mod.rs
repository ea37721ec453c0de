//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod dive_entries;
pub mod error;
pub mod health;
pub mod schemas;
pub mod sightings;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the dive log endpoints and the JSON/path extractor error
/// handlers on an application or scope.
///
/// `HttpState` must be supplied separately as `web::Data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(dive_entries::create_dive_entry)
        .service(dive_entries::list_dive_entries)
        .service(sightings::list_sightings_for_dive_entry)
        .service(dive_entries::get_dive_entry)
        .service(sightings::upload_sighting)
        .service(sightings::get_sighting);
}
