//! Tenant repository
//!
//! Handles tenant CRUD with:
//! - INNER JOIN to the property for the address on read paths
//! - Property existence check and write in one transaction

use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewTenant, TenantPatch};

/// Tenant record from database
#[derive(Debug, Clone, FromRow)]
pub struct Tenant {
    #[sqlx(rename = "TenantID")]
    pub id: i64,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "RentDue")]
    pub rent_due: f64,
    #[sqlx(rename = "PropertyID")]
    pub property_id: i64,
}

/// Tenant joined with its property's address
#[derive(Debug, Clone)]
pub struct TenantWithAddress {
    pub id: i64,
    pub name: String,
    pub rent_due: f64,
    pub property_id: i64,
    pub property_address: String,
}

impl TenantWithAddress {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        Self {
            id: row.get("TenantID"),
            name: row.get("Name"),
            rent_due: row.get("RentDue"),
            property_id: row.get("PropertyID"),
            property_address: row.get("property_address"),
        }
    }
}

/// Tenant repository
pub struct TenantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TenantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List tenants joined with their property address.
    pub async fn list(&self) -> Result<Vec<TenantWithAddress>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT t.TenantID, t.Name, t.RentDue, t.PropertyID,
                   p.Address AS property_address
            FROM Tenant t
            JOIN Property p ON t.PropertyID = p.PropertyID
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(TenantWithAddress::from_row).collect())
    }

    /// Get a single tenant by id, joined with the property address.
    pub async fn get(&self, id: i64) -> Result<TenantWithAddress, DbError> {
        let row = sqlx::query(
            r#"
            SELECT t.TenantID, t.Name, t.RentDue, t.PropertyID,
                   p.Address AS property_address
            FROM Tenant t
            JOIN Property p ON t.PropertyID = p.PropertyID
            WHERE t.TenantID = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Tenant",
            id,
        })?;

        Ok(TenantWithAddress::from_row(&row))
    }

    /// List tenants of one property. An unknown property yields an empty
    /// list, not an error.
    pub async fn list_for_property(&self, property_id: i64) -> Result<Vec<Tenant>, DbError> {
        let tenants = sqlx::query_as::<_, Tenant>("SELECT * FROM Tenant WHERE PropertyID = ?")
            .bind(property_id)
            .fetch_all(self.pool)
            .await?;
        Ok(tenants)
    }

    /// Insert a tenant and return the row joined with the property address.
    ///
    /// The referenced property must exist; the check and the insert share
    /// a transaction so the property cannot vanish in between.
    pub async fn create(&self, input: &NewTenant) -> Result<TenantWithAddress, DbError> {
        let mut tx = self.pool.begin().await?;

        check_property_exists(&mut tx, input.property_id).await?;

        let result = sqlx::query("INSERT INTO Tenant (Name, RentDue, PropertyID) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(input.rent_due)
            .bind(input.property_id)
            .execute(&mut *tx)
            .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;
        self.get(id).await
    }

    /// Apply a partial update and return the updated joined row.
    ///
    /// A supplied `property_id` must reference an existing property.
    /// Callers validate the patch first; this never sees an empty one.
    pub async fn update(&self, id: i64, patch: &TenantPatch) -> Result<TenantWithAddress, DbError> {
        let mut tx = self.pool.begin().await?;

        if let Some(property_id) = patch.property_id {
            check_property_exists(&mut tx, property_id).await?;
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE Tenant SET ");
        let mut sets = qb.separated(", ");
        if let Some(name) = &patch.name {
            sets.push("Name = ").push_bind_unseparated(name);
        }
        if let Some(rent_due) = patch.rent_due {
            sets.push("RentDue = ").push_bind_unseparated(rent_due);
        }
        if let Some(property_id) = patch.property_id {
            sets.push("PropertyID = ").push_bind_unseparated(property_id);
        }
        qb.push(" WHERE TenantID = ").push_bind(id);

        let result = qb.build().execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Tenant",
                id,
            });
        }

        tx.commit().await?;
        self.get(id).await
    }

    /// Delete a tenant by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM Tenant WHERE TenantID = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Tenant",
                id,
            });
        }
        Ok(())
    }
}

async fn check_property_exists(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    property_id: i64,
) -> Result<(), DbError> {
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM Property WHERE PropertyID = ?)")
        .bind(property_id)
        .fetch_one(&mut **tx)
        .await?;

    if !exists.0 {
        return Err(DbError::NotFound {
            resource: "Property",
            id: property_id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_pool;
    use crate::db::repos::PropertyRepo;
    use crate::models::NewProperty;

    async fn seed_property(pool: &SqlitePool, address: &str) -> i64 {
        PropertyRepo::new(pool)
            .create(&NewProperty::new(address, 100_000.0, 900.0).unwrap())
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_returns_joined_address() {
        let pool = test_pool().await;
        let property_id = seed_property(&pool, "1 A St").await;

        let tenant = TenantRepo::new(&pool)
            .create(&NewTenant::new("T", 900.0, property_id).unwrap())
            .await
            .unwrap();

        assert_eq!(tenant.property_address, "1 A St");
        assert_eq!(tenant.rent_due, 900.0);
    }

    #[tokio::test]
    async fn create_against_missing_property_inserts_nothing() {
        let pool = test_pool().await;
        let repo = TenantRepo::new(&pool);

        let err = repo
            .create(&NewTenant::new("T", 900.0, 42).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Property", .. }));

        let all = repo.list_for_property(42).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn update_can_move_tenant_between_properties() {
        let pool = test_pool().await;
        let first = seed_property(&pool, "1 A St").await;
        let second = seed_property(&pool, "2 B St").await;

        let repo = TenantRepo::new(&pool);
        let tenant = repo
            .create(&NewTenant::new("T", 900.0, first).unwrap())
            .await
            .unwrap();

        let patch = TenantPatch {
            property_id: Some(second),
            ..Default::default()
        };
        let moved = repo.update(tenant.id, &patch).await.unwrap();

        assert_eq!(moved.property_id, second);
        assert_eq!(moved.property_address, "2 B St");
        assert_eq!(moved.name, "T");
    }

    #[tokio::test]
    async fn update_to_missing_property_leaves_row_unchanged() {
        let pool = test_pool().await;
        let property_id = seed_property(&pool, "1 A St").await;

        let repo = TenantRepo::new(&pool);
        let tenant = repo
            .create(&NewTenant::new("T", 900.0, property_id).unwrap())
            .await
            .unwrap();

        let patch = TenantPatch {
            name: Some("Renamed".into()),
            property_id: Some(42),
            ..Default::default()
        };
        let err = repo.update(tenant.id, &patch).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Property", .. }));

        let unchanged = repo.get(tenant.id).await.unwrap();
        assert_eq!(unchanged.name, "T");
        assert_eq!(unchanged.property_id, property_id);
    }

    #[tokio::test]
    async fn list_for_unknown_property_is_empty_not_error() {
        let pool = test_pool().await;
        let tenants = TenantRepo::new(&pool).list_for_property(42).await.unwrap();
        assert!(tenants.is_empty());
    }

    #[tokio::test]
    async fn property_delete_cascades_to_tenants() {
        let pool = test_pool().await;
        let property_id = seed_property(&pool, "1 A St").await;

        let repo = TenantRepo::new(&pool);
        let tenant = repo
            .create(&NewTenant::new("T", 900.0, property_id).unwrap())
            .await
            .unwrap();

        PropertyRepo::new(&pool).delete(property_id).await.unwrap();

        let err = repo.get(tenant.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Tenant", .. }));
        assert!(repo.list_for_property(property_id).await.unwrap().is_empty());
    }
}
