//! Property repository
//!
//! Handles property CRUD plus the aggregate read shape:
//! - list/get: LEFT JOIN tenants for tenant_count + tenant_names (no N+1)
//! - update: dynamic SET over the supplied subset of fields

use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewProperty, PropertyPatch};

/// Property record from database
#[derive(Debug, Clone, FromRow)]
pub struct Property {
    #[sqlx(rename = "PropertyID")]
    pub id: i64,
    #[sqlx(rename = "Address")]
    pub address: String,
    #[sqlx(rename = "ListingPrice")]
    pub listing_price: f64,
    #[sqlx(rename = "Rent")]
    pub rent: f64,
}

/// Property with tenant aggregates for list display.
///
/// `tenant_names` is the GROUP_CONCAT of tenant names, `None` when the
/// property has no tenants.
#[derive(Debug, Clone)]
pub struct PropertyWithTenants {
    pub id: i64,
    pub address: String,
    pub listing_price: f64,
    pub rent: f64,
    pub tenant_count: i64,
    pub tenant_names: Option<String>,
}

impl PropertyWithTenants {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        Self {
            id: row.get("PropertyID"),
            address: row.get("Address"),
            listing_price: row.get("ListingPrice"),
            rent: row.get("Rent"),
            tenant_count: row.get("tenant_count"),
            tenant_names: row.get("tenant_names"),
        }
    }
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List properties with tenant aggregates.
    pub async fn list(&self) -> Result<Vec<PropertyWithTenants>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.PropertyID, p.Address, p.ListingPrice, p.Rent,
                COUNT(t.TenantID) AS tenant_count,
                GROUP_CONCAT(t.Name) AS tenant_names
            FROM Property p
            LEFT JOIN Tenant t ON p.PropertyID = t.PropertyID
            GROUP BY p.PropertyID
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(PropertyWithTenants::from_row).collect())
    }

    /// Get a single property by id with tenant aggregates.
    pub async fn get(&self, id: i64) -> Result<PropertyWithTenants, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                p.PropertyID, p.Address, p.ListingPrice, p.Rent,
                COUNT(t.TenantID) AS tenant_count,
                GROUP_CONCAT(t.Name) AS tenant_names
            FROM Property p
            LEFT JOIN Tenant t ON p.PropertyID = t.PropertyID
            WHERE p.PropertyID = ?
            GROUP BY p.PropertyID
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Property",
            id,
        })?;

        Ok(PropertyWithTenants::from_row(&row))
    }

    /// Insert a property and return the freshly inserted row.
    pub async fn create(&self, input: &NewProperty) -> Result<Property, DbError> {
        let result = sqlx::query("INSERT INTO Property (Address, ListingPrice, Rent) VALUES (?, ?, ?)")
            .bind(&input.address)
            .bind(input.listing_price)
            .bind(input.rent)
            .execute(self.pool)
            .await?;

        self.fetch_row(result.last_insert_rowid()).await
    }

    /// Apply a partial update and return the updated row.
    ///
    /// Callers validate the patch first; this never sees an empty one.
    pub async fn update(&self, id: i64, patch: &PropertyPatch) -> Result<Property, DbError> {
        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE Property SET ");
        let mut sets = qb.separated(", ");
        if let Some(address) = &patch.address {
            sets.push("Address = ").push_bind_unseparated(address);
        }
        if let Some(listing_price) = patch.listing_price {
            sets.push("ListingPrice = ").push_bind_unseparated(listing_price);
        }
        if let Some(rent) = patch.rent {
            sets.push("Rent = ").push_bind_unseparated(rent);
        }
        qb.push(" WHERE PropertyID = ").push_bind(id);

        let result = qb.build().execute(self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Property",
                id,
            });
        }

        self.fetch_row(id).await
    }

    /// Delete a property by id. Tenants cascade at the store level.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM Property WHERE PropertyID = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Property",
                id,
            });
        }
        Ok(())
    }

    async fn fetch_row(&self, id: i64) -> Result<Property, DbError> {
        sqlx::query_as::<_, Property>("SELECT * FROM Property WHERE PropertyID = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "Property",
                id,
            })
    }
}
