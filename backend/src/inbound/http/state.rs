//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DiveEntryCommand, DiveEntryQuery, SightingCommand, SightingQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub dive_entries: Arc<dyn DiveEntryCommand>,
    pub dive_entries_query: Arc<dyn DiveEntryQuery>,
    pub sightings: Arc<dyn SightingCommand>,
    pub sightings_query: Arc<dyn SightingQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    ///
    /// A single service usually implements both halves of a command/query
    /// pair, so the same `Arc` may be passed twice.
    pub fn new(
        dive_entries: Arc<dyn DiveEntryCommand>,
        dive_entries_query: Arc<dyn DiveEntryQuery>,
        sightings: Arc<dyn SightingCommand>,
        sightings_query: Arc<dyn SightingQuery>,
    ) -> Self {
        Self {
            dive_entries,
            dive_entries_query,
            sightings,
            sightings_query,
        }
    }
}
