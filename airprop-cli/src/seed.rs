//! Sample-data seeding for `airprop init-db`
//!
//! Goes through the repositories rather than raw INSERTs so the seed data
//! passes the same validation as API traffic.

use anyhow::Result;
use sqlx::SqlitePool;

use airprop_server::db::{PropertyRepo, TenantRepo};
use airprop_server::models::{NewProperty, NewTenant};

const SAMPLE_PROPERTIES: &[(&str, f64, f64)] = &[
    ("123 Main St, City A", 250_000.0, 1_500.0),
    ("456 Oak Ave, City B", 300_000.0, 1_800.0),
    ("789 Pine Rd, City C", 200_000.0, 1_200.0),
];

const SAMPLE_TENANTS: &[(&str, f64)] = &[
    ("John Doe", 1_500.0),
    ("Jane Smith", 1_800.0),
    ("Bob Johnson", 1_200.0),
];

/// Insert one sample tenant per sample property.
pub async fn insert_sample_data(pool: &SqlitePool) -> Result<()> {
    let properties = PropertyRepo::new(pool);
    let tenants = TenantRepo::new(pool);

    for ((address, listing_price, rent), (name, rent_due)) in
        SAMPLE_PROPERTIES.iter().zip(SAMPLE_TENANTS)
    {
        let property = properties
            .create(&NewProperty::new(*address, *listing_price, *rent)?)
            .await?;
        tenants
            .create(&NewTenant::new(*name, *rent_due, property.id)?)
            .await?;
        tracing::info!(property_id = property.id, address = *address, "seeded property");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use airprop_server::db::{migrations, pool::create_pool_with_options};

    #[tokio::test]
    async fn seeds_three_of_each() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");
        migrations::run(&pool).await.expect("schema");

        insert_sample_data(&pool).await.expect("seed");

        let properties = PropertyRepo::new(&pool).list().await.expect("list");
        assert_eq!(properties.len(), 3);
        assert!(properties.iter().all(|p| p.tenant_count == 1));

        let tenants = TenantRepo::new(&pool).list().await.expect("list");
        assert_eq!(tenants.len(), 3);
    }
}
