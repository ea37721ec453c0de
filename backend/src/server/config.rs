//! HTTP server configuration object.

use std::net::SocketAddr;

use nudilog::outbound::persistence::DbPool;
use nudilog::outbound::storage::CapStdPhotoStore;

/// Everything the server needs beyond the health state: where to listen and
/// the adapters backing the services.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) photo_store: CapStdPhotoStore,
}

impl ServerConfig {
    /// Construct a server configuration from its adapters.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, photo_store: CapStdPhotoStore) -> Self {
        Self {
            bind_addr,
            db_pool,
            photo_store,
        }
    }
}
