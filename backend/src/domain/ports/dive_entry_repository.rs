//! Port for dive entry persistence.

use async_trait::async_trait;

use crate::domain::{DiveEntry, DiveEntryId, NewDiveEntry};

use super::define_port_error;

define_port_error! {
    /// Errors raised by dive entry repository adapters.
    pub enum DiveEntryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "dive entry repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "dive entry repository query failed: {message}",
    }
}

/// Port for writing dive entries and reading them with their sightings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiveEntryRepository: Send + Sync {
    /// Insert a new dive entry and return it with an empty sightings list.
    async fn create(&self, entry: &NewDiveEntry) -> Result<DiveEntry, DiveEntryRepositoryError>;

    /// Find a dive entry by id, sightings included.
    async fn find_by_id(
        &self,
        id: DiveEntryId,
    ) -> Result<Option<DiveEntry>, DiveEntryRepositoryError>;

    /// Read every dive entry in storage order, sightings included.
    async fn list_all(&self) -> Result<Vec<DiveEntry>, DiveEntryRepositoryError>;

    /// Report whether a dive entry with this id exists.
    async fn exists(&self, id: DiveEntryId) -> Result<bool, DiveEntryRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_error_formats_message() {
        let err = DiveEntryRepositoryError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "dive entry repository connection failed: pool timed out"
        );
    }
}
