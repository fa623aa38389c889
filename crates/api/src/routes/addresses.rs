//! Address Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;
use address_book::{Address, Nearby};

/// Body for create and full replacement. The legacy field names
/// `address` and `lattitude` are accepted as aliases.
#[derive(Debug, Deserialize)]
pub struct AddressPayload {
    #[serde(alias = "address")]
    pub label: String,
    #[serde(alias = "lattitude")]
    pub latitude: f64,
    pub longitude: f64,
}

/// Response for list endpoint
#[derive(Debug, Serialize)]
pub struct AddressListResponse {
    pub data: Vec<Address>,
    pub count: usize,
}

/// Response for proximity endpoint
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub target_id: i64,
    pub radius_km: f64,
    pub data: Vec<Nearby>,
    pub count: usize,
}

/// List addresses
pub async fn list_addresses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AddressListResponse>, ApiError> {
    let data = state.address_book.list_addresses().await?;
    Ok(Json(AddressListResponse {
        count: data.len(),
        data,
    }))
}

/// Fetch one address
pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Address>, ApiError> {
    Ok(Json(state.address_book.get_address(id).await?))
}

/// Create an address
pub async fn create_address(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddressPayload>,
) -> Result<(StatusCode, Json<Address>), ApiError> {
    let address = state
        .address_book
        .create_address(&payload.label, payload.latitude, payload.longitude)
        .await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Replace every field of an address
pub async fn replace_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<AddressPayload>,
) -> Result<Json<Address>, ApiError> {
    let address = state
        .address_book
        .replace_address(id, &payload.label, payload.latitude, payload.longitude)
        .await?;
    Ok(Json(address))
}

/// Delete an address
pub async fn delete_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.address_book.delete_address(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Addresses within a radius (km) of the target
pub async fn find_within_radius(
    State(state): State<Arc<AppState>>,
    Path((target_id, radius_km)): Path<(i64, f64)>,
) -> Result<Json<NearbyResponse>, ApiError> {
    let data = state
        .address_book
        .find_within_radius_with_distance(target_id, radius_km)
        .await?;
    Ok(Json(NearbyResponse {
        target_id,
        radius_km,
        count: data.len(),
        data,
    }))
}
