//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Foreign key
//! enforcement is part of the connect options so every pooled connection
//! gets the pragma, not just the first one.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for a single local database file.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite:airprop.db?mode=rwc`
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with a custom connection limit.
///
/// Tests use a limit of 1 so `sqlite::memory:` databases are shared
/// across all queries on the pool.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_acquires_connection() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("pragma query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn file_backed_pool_creates_database() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite:{}/airprop.db?mode=rwc", dir.path().display());

        let pool = create_pool(&url).await.expect("pool creation failed");
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .expect("create failed");

        assert!(dir.path().join("airprop.db").exists());
    }
}
