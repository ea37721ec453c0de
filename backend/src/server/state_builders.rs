//! Wire repository-backed services into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use nudilog::domain::{DiveEntryService, SightingService};
use nudilog::inbound::http::state::HttpState;
use nudilog::outbound::persistence::{DieselDiveEntryRepository, DieselSightingRepository};

use super::ServerConfig;

/// Build the shared HTTP state from the configured pool and photo store.
///
/// One service instance backs both the command and query port of each pair.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let dive_entry_repo = Arc::new(DieselDiveEntryRepository::new(config.db_pool.clone()));
    let sighting_repo = Arc::new(DieselSightingRepository::new(config.db_pool.clone()));
    let photo_store = Arc::new(config.photo_store.clone());

    let dive_entries = Arc::new(DiveEntryService::new(Arc::clone(&dive_entry_repo)));
    let sightings = Arc::new(SightingService::new(
        dive_entry_repo,
        sighting_repo,
        photo_store,
    ));

    web::Data::new(HttpState::new(
        dive_entries.clone(),
        dive_entries,
        sightings.clone(),
        sightings,
    ))
}
