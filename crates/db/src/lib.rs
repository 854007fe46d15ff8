//! Persistence for the character/lesson catalog.
//!
//! - [`create_pool`] / [`health_check`] -- connection management.
//! - [`ensure_schema`] -- applies the embedded migrations (idempotent).
//! - [`repositories`] -- query functions, all using bound parameters.

pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `character` and `lesson` tables if they do not exist yet.
///
/// Safe to call on every startup: already-applied migrations are skipped.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Catalog schema is up to date");
    Ok(())
}
