//! End-to-end smoke run against a live server
//!
//! Walks the API through a full property/tenant lifecycle and prints one
//! line per step. Exits non-zero on the first unexpected status.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde_json::{json, Value};

/// Arguments for the smoke command
#[derive(Parser, Debug)]
pub struct SmokeArgs {
    /// Base URL of a running server
    #[arg(long, default_value = "http://127.0.0.1:3000/api")]
    pub base_url: String,
}

pub async fn run_smoke(args: SmokeArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let base = args.base_url.trim_end_matches('/');

    // 1. Health
    let res = client.get(format!("{base}/health")).send().await?;
    ensure!(res.status() == 200, "health returned {}", res.status());
    println!("health: {}", res.status());

    // 2. Existing data is readable
    let res = client.get(format!("{base}/properties")).send().await?;
    ensure!(res.status() == 200, "list properties returned {}", res.status());
    let existing: Value = res.json().await?;
    println!(
        "list properties: {} rows",
        existing.as_array().map(Vec::len).unwrap_or(0)
    );

    // 3. Create a property
    let res = client
        .post(format!("{base}/properties"))
        .json(&json!({"address": "999 Smoke St", "listingPrice": 400000.0, "rent": 2000.0}))
        .send()
        .await?;
    ensure!(res.status() == 201, "create property returned {}", res.status());
    let property: Value = res.json().await?;
    let property_id = property["PropertyID"]
        .as_i64()
        .context("create property: no PropertyID in response")?;
    println!("create property: id {property_id}");

    // 4. Create a tenant on it
    let res = client
        .post(format!("{base}/tenants"))
        .json(&json!({"name": "Smoke Tenant", "rentDue": 2000.0, "propertyId": property_id}))
        .send()
        .await?;
    ensure!(res.status() == 201, "create tenant returned {}", res.status());
    let tenant: Value = res.json().await?;
    let tenant_id = tenant["TenantID"]
        .as_i64()
        .context("create tenant: no TenantID in response")?;
    ensure!(
        tenant["property_address"] == "999 Smoke St",
        "create tenant: wrong property_address {}",
        tenant["property_address"]
    );
    println!("create tenant: id {tenant_id}");

    // 5. Aggregates show up on the property
    let res = client
        .get(format!("{base}/properties/{property_id}"))
        .send()
        .await?;
    ensure!(res.status() == 200, "get property returned {}", res.status());
    let aggregated: Value = res.json().await?;
    ensure!(
        aggregated["tenant_count"] == 1,
        "expected tenant_count 1, got {}",
        aggregated["tenant_count"]
    );
    println!("get property: tenant_count {}", aggregated["tenant_count"]);

    // 6. Partial update
    let res = client
        .put(format!("{base}/properties/{property_id}"))
        .json(&json!({"rent": 2100.0}))
        .send()
        .await?;
    ensure!(res.status() == 200, "update property returned {}", res.status());
    println!("update property: {}", res.status());

    // 7. Clean up
    let res = client
        .delete(format!("{base}/tenants/{tenant_id}"))
        .send()
        .await?;
    ensure!(res.status() == 200, "delete tenant returned {}", res.status());
    println!("delete tenant: {}", res.status());

    let res = client
        .delete(format!("{base}/properties/{property_id}"))
        .send()
        .await?;
    ensure!(res.status() == 200, "delete property returned {}", res.status());
    println!("delete property: {}", res.status());

    // 8. Gone means gone
    let res = client
        .get(format!("{base}/properties/{property_id}"))
        .send()
        .await?;
    ensure!(res.status() == 404, "expected 404 after delete, got {}", res.status());
    println!("get deleted property: {}", res.status());

    println!("smoke run passed");
    Ok(())
}
