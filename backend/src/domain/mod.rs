//! Domain primitives, ports, and services.
//!
//! Purpose: define the dive log entities, the transport-agnostic error type,
//! and the services that implement the driving ports on top of the driven
//! ports. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - `DiveEntry`, `NewDiveEntry`, `DiveEntryId`: logged dives.
//! - `Sighting`, `NewSighting`, `SightingId`, `PhotoFilename`: photos
//!   recorded against a dive.
//! - `Error`, `ErrorCode`: error payload shared by every adapter.
//! - `TraceId`: request correlation identifier.
//! - `DiveEntryService`, `SightingService`: driving port implementations.

mod dive_entry;
mod dive_entry_service;
pub mod error;
pub mod ports;
mod sighting;
mod sighting_service;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod trace_id;

pub use self::dive_entry::{DiveEntry, DiveEntryId, NewDiveEntry};
pub use self::dive_entry_service::DiveEntryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::sighting::{
    MAX_FILENAME_BYTES, NewSighting, PhotoFilename, PhotoFilenameError, Sighting, SightingId,
};
pub use self::sighting_service::SightingService;
pub use self::trace_id::TraceId;
