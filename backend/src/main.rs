//! Backend entry-point: loads settings, migrates the database, and serves the
//! dive log API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use nudilog::inbound::http::health::HealthState;
use nudilog::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use nudilog::outbound::storage::CapStdPhotoStore;
use nudilog::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let database_url = settings.database_url().to_owned();
    let upload_dir = settings.upload_dir();

    let migrate_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migrate_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool_config = PoolConfig::new(&database_url)
        .with_max_size(settings.pool_max_size())
        .with_busy_timeout(settings.busy_timeout());
    let db_pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;
    let photo_store = CapStdPhotoStore::open(&upload_dir).map_err(|err| {
        std::io::Error::other(format!(
            "failed to open upload directory {}: {err}",
            upload_dir.display()
        ))
    })?;

    info!(
        %bind_addr,
        database = %database_url,
        upload_dir = %upload_dir.display(),
        "starting nudilog"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, db_pool, photo_store);
    create_server(health_state, config)?.await
}
