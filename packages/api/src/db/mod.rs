//! # Database module — SQLite connection pool and queries
//!
//! This module provides the shared SQLite pool used by every server function
//! in the `api` crate, plus the query modules for the two application tables.
//! It is entirely gated behind `#[cfg(feature = "server")]` so that client
//! (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens the pool, and
//! creates the `users` and `notes` tables if they do not exist yet. Every
//! query is a single statement; there are no cross-call transactions and no
//! retry policy.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, init_schema};

#[cfg(feature = "server")]
pub mod notes;
#[cfg(feature = "server")]
pub mod users;

#[cfg(all(test, feature = "server"))]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection only: every pooled connection to "sqlite::memory:"
    // would otherwise open its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    init_schema(&pool).await.expect("schema");
    pool
}
