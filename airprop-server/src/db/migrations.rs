//! Schema setup for the Property and Tenant tables
//!
//! Idempotent, run at pool startup. Tenants cascade on property delete so
//! the store never holds rows the tenant read path (an inner join on the
//! property) would silently hide.

use sqlx::SqlitePool;

/// Create the schema if it does not exist yet.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema setup...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Property (
            PropertyID INTEGER PRIMARY KEY AUTOINCREMENT,
            Address TEXT NOT NULL,
            ListingPrice REAL NOT NULL CHECK (ListingPrice >= 0),
            Rent REAL NOT NULL CHECK (Rent >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Tenant (
            TenantID INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            RentDue REAL NOT NULL CHECK (RentDue >= 0),
            PropertyID INTEGER NOT NULL,
            FOREIGN KEY (PropertyID) REFERENCES Property(PropertyID) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tenant_property ON Tenant(PropertyID)")
        .execute(pool)
        .await?;

    tracing::info!("Schema setup complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    #[tokio::test]
    async fn run_is_idempotent() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");
        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }

    #[tokio::test]
    async fn foreign_key_rejected_without_property() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");
        run(&pool).await.expect("migrations");

        // Direct insert bypassing the repository existence check; the
        // store-level constraint is the backstop.
        let result = sqlx::query("INSERT INTO Tenant (Name, RentDue, PropertyID) VALUES (?, ?, ?)")
            .bind("Ghost")
            .bind(100.0)
            .bind(999)
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }
}
