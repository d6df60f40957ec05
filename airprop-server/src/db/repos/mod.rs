//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - JOINs for list operations (no N+1)
//! - `fetch_optional` mapped to `NotFound` for single-row reads
//! - Transactions around existence-check-then-write sequences

pub mod properties;
pub mod tenants;

pub use properties::{Property, PropertyRepo, PropertyWithTenants};
pub use tenants::{Tenant, TenantRepo, TenantWithAddress};

/// Database error type shared by the repositories
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: i64 },
}

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::db::pool::create_pool_with_options("sqlite::memory:", 1)
        .await
        .expect("test pool creation failed");
    crate::db::migrations::run(&pool)
        .await
        .expect("schema setup failed");
    pool
}
