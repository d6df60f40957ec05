//! Property endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::repos::{Property, PropertyRepo, PropertyWithTenants};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewProperty, PropertyPatch};

/// Create / update request body. All fields optional so presence checks
/// produce 400s with the API's own messages instead of extractor rejections.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBody {
    pub address: Option<String>,
    pub listing_price: Option<f64>,
    pub rent: Option<f64>,
}

/// Plain property row, column-named like the store
#[derive(Serialize)]
pub struct PropertyResponse {
    #[serde(rename = "PropertyID")]
    pub id: i64,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "ListingPrice")]
    pub listing_price: f64,
    #[serde(rename = "Rent")]
    pub rent: f64,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id,
            address: p.address,
            listing_price: p.listing_price,
            rent: p.rent,
        }
    }
}

/// Property row with tenant aggregates
#[derive(Serialize)]
pub struct PropertyWithTenantsResponse {
    #[serde(rename = "PropertyID")]
    pub id: i64,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "ListingPrice")]
    pub listing_price: f64,
    #[serde(rename = "Rent")]
    pub rent: f64,
    pub tenant_count: i64,
    pub tenant_names: Option<String>,
}

impl From<PropertyWithTenants> for PropertyWithTenantsResponse {
    fn from(p: PropertyWithTenants) -> Self {
        Self {
            id: p.id,
            address: p.address,
            listing_price: p.listing_price,
            rent: p.rent,
            tenant_count: p.tenant_count,
            tenant_names: p.tenant_names,
        }
    }
}

/// GET /properties - list all properties with tenant aggregates
async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PropertyWithTenantsResponse>>, ApiError> {
    let rows = PropertyRepo::new(&state.pool).list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /properties/{id} - get a single property
async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyWithTenantsResponse>, ApiError> {
    let row = PropertyRepo::new(&state.pool).get(id).await?;
    Ok(Json(row.into()))
}

/// POST /properties - create a new property
async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PropertyBody>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError> {
    let input = NewProperty::from_parts(body.address, body.listing_price, body.rent)?;
    let property = PropertyRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(property.into())))
}

/// PUT /properties/{id} - partial update
async fn update_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<PropertyBody>,
) -> Result<Json<PropertyResponse>, ApiError> {
    let patch = PropertyPatch {
        address: body.address,
        listing_price: body.listing_price,
        rent: body.rent,
    };
    patch.validate()?;
    let property = PropertyRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(property.into()))
}

/// DELETE /properties/{id}
async fn delete_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    PropertyRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Property deleted successfully" })))
}

/// Property routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/{id}",
            get(get_property).put(update_property).delete(delete_property),
        )
}
