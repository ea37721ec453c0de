//! Async-safe connection pool for Diesel SQLite connections.
//!
//! SQLite connections are synchronous, so each one is wrapped in
//! `diesel-async`'s `SyncConnectionWrapper`, which runs queries on the
//! blocking thread pool. `bb8` manages checkout and recycling.
//!
//! Every connection enables foreign keys and sets a busy timeout on setup,
//! so concurrent writers wait for SQLite's single writer lock instead of
//! failing immediately.

use std::sync::Arc;
use std::time::Duration;

use diesel::{ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Async wrapper around a synchronous SQLite connection.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use nudilog::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("nudilog.db")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "nudilog.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given database file or URL.
    ///
    /// Defaults: `max_size` 10, `min_idle` 1, `connection_timeout` 30
    /// seconds, `busy_timeout` 5 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(1),
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set how long a connection waits on a locked database before a
    /// statement fails with `database is locked`.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn connection_pragmas(busy_timeout: Duration) -> String {
    format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    )
}

fn establish_connection(
    database_url: &str,
    pragmas: Arc<str>,
) -> BoxFuture<'_, ConnectionResult<DbConnection>> {
    async move {
        let mut conn = DbConnection::establish(database_url).await?;
        conn.batch_execute(&pragmas)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

fn connection_setup(
    busy_timeout: Duration,
) -> impl Fn(&str) -> BoxFuture<'_, ConnectionResult<DbConnection>> + Send + Sync {
    let pragmas: Arc<str> = connection_pragmas(busy_timeout).into();
    move |url| establish_connection(url, Arc::clone(&pragmas))
}

/// Async connection pool for SQLite via Diesel.
///
/// Cloning is cheap; every clone shares the same underlying pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<DbConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g. the
    /// database file cannot be opened).
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(connection_setup(config.busy_timeout));
        let manager = AsyncDieselConnectionManager::<DbConnection>::new_with_config(
            &config.database_url,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, DbConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
