//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by a SQLite database file via Diesel, with async support
//! through `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: synchronous SQLite connections are wrapped in
//!   `SyncConnectionWrapper` and handed out by a `bb8` pool.
//! - **Embedded migrations**: `run_migrations` brings a database file up to
//!   date before the pool is built.
//!
//! # Example
//!
//! ```ignore
//! use nudilog::outbound::persistence::{
//!     DbPool, DieselDiveEntryRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("nudilog.db")?;
//! let pool = DbPool::new(PoolConfig::new("nudilog.db")).await?;
//! let repo = DieselDiveEntryRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_dive_entry_repository;
mod diesel_sighting_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_dive_entry_repository::DieselDiveEntryRepository;
pub use diesel_sighting_repository::DieselSightingRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
