//! Database connection pool using OnceLock pattern.

use anyhow::Context as _;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

static POOL: OnceCell<SqlitePool> = OnceCell::const_new();

/// Connection string for the local database file, overridable via
/// `DATABASE_URL`. `mode=rwc` creates the file on first access.
const DEFAULT_DATABASE_URL: &str = "sqlite://postdesk.db?mode=rwc";

/// Get or initialize the database connection pool.
pub async fn get_pool() -> anyhow::Result<&'static SqlitePool> {
    POOL.get_or_try_init(init_connection_pool).await
}

async fn init_connection_pool() -> anyhow::Result<SqlitePool> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .with_context(|| format!("Failed to open database at {database_url}"))?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the application tables if they don't exist.
pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            login TEXT NOT NULL UNIQUE,
            password_digest TEXT NOT NULL
        );",
    )
    .execute(pool)
    .await
    .context("Failed to create users table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            note TEXT NOT NULL,
            priority INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .execute(pool)
    .await
    .context("Failed to create notes table")?;

    Ok(())
}
