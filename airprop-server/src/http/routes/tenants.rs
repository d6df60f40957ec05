//! Tenant endpoints, including the tenants-of-a-property listing

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::repos::{Tenant, TenantRepo, TenantWithAddress};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewTenant, TenantPatch};

/// Create / update request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantBody {
    pub name: Option<String>,
    pub rent_due: Option<f64>,
    pub property_id: Option<i64>,
}

/// Plain tenant row, no join
#[derive(Serialize)]
pub struct TenantResponse {
    #[serde(rename = "TenantID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RentDue")]
    pub rent_due: f64,
    #[serde(rename = "PropertyID")]
    pub property_id: i64,
}

impl From<Tenant> for TenantResponse {
    fn from(t: Tenant) -> Self {
        Self {
            id: t.id,
            name: t.name,
            rent_due: t.rent_due,
            property_id: t.property_id,
        }
    }
}

/// Tenant row joined with the property address
#[derive(Serialize)]
pub struct TenantWithAddressResponse {
    #[serde(rename = "TenantID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RentDue")]
    pub rent_due: f64,
    #[serde(rename = "PropertyID")]
    pub property_id: i64,
    pub property_address: String,
}

impl From<TenantWithAddress> for TenantWithAddressResponse {
    fn from(t: TenantWithAddress) -> Self {
        Self {
            id: t.id,
            name: t.name,
            rent_due: t.rent_due,
            property_id: t.property_id,
            property_address: t.property_address,
        }
    }
}

/// GET /tenants - list all tenants with their property address
async fn list_tenants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TenantWithAddressResponse>>, ApiError> {
    let rows = TenantRepo::new(&state.pool).list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /tenants/{id} - get a single tenant
async fn get_tenant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TenantWithAddressResponse>, ApiError> {
    let row = TenantRepo::new(&state.pool).get(id).await?;
    Ok(Json(row.into()))
}

/// GET /properties/{id}/tenants - tenants of one property (possibly empty)
async fn list_property_tenants(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TenantResponse>>, ApiError> {
    let rows = TenantRepo::new(&state.pool).list_for_property(id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /tenants - create a new tenant
async fn create_tenant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TenantBody>,
) -> Result<(StatusCode, Json<TenantWithAddressResponse>), ApiError> {
    let input = NewTenant::from_parts(body.name, body.rent_due, body.property_id)?;
    let tenant = TenantRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(tenant.into())))
}

/// PUT /tenants/{id} - partial update
async fn update_tenant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<TenantBody>,
) -> Result<Json<TenantWithAddressResponse>, ApiError> {
    let patch = TenantPatch {
        name: body.name,
        rent_due: body.rent_due,
        property_id: body.property_id,
    };
    patch.validate()?;
    let tenant = TenantRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(tenant.into()))
}

/// DELETE /tenants/{id}
async fn delete_tenant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    TenantRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Tenant deleted successfully" })))
}

/// Tenant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tenants", get(list_tenants).post(create_tenant))
        .route(
            "/tenants/{id}",
            get(get_tenant).put(update_tenant).delete(delete_tenant),
        )
        .route("/properties/{id}/tenants", get(list_property_tenants))
}
