//! Domain ports.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters.
//! Driven ports (repositories, the photo store) are implemented by outbound
//! adapters and consumed by the domain services.

mod dive_entry_command;
mod dive_entry_query;
mod dive_entry_repository;
mod macros;
mod photo_store;
mod sighting_command;
mod sighting_query;
mod sighting_repository;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use dive_entry_command::MockDiveEntryCommand;
pub use dive_entry_command::DiveEntryCommand;
#[cfg(test)]
pub use dive_entry_query::MockDiveEntryQuery;
pub use dive_entry_query::DiveEntryQuery;
#[cfg(test)]
pub use dive_entry_repository::MockDiveEntryRepository;
pub use dive_entry_repository::{DiveEntryRepository, DiveEntryRepositoryError};
#[cfg(test)]
pub use photo_store::MockPhotoStore;
pub use photo_store::{PhotoStore, PhotoStoreError, StoredPhoto};
#[cfg(test)]
pub use sighting_command::MockSightingCommand;
pub use sighting_command::{SightingCommand, UploadSightingRequest};
#[cfg(test)]
pub use sighting_query::MockSightingQuery;
pub use sighting_query::SightingQuery;
#[cfg(test)]
pub use sighting_repository::MockSightingRepository;
pub use sighting_repository::{SightingRepository, SightingRepositoryError};
