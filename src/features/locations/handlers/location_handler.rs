use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::core::error::Result;
use crate::features::locations::dtos::{
    LocationResponseDto, SaveLocationDto, SaveLocationResponseDto,
};
use crate::features::locations::services::LocationService;
use crate::shared::types::StatusResponse;

/// Save the client's current location
///
/// The coordinate must lie inside the Philippines. It is reverse-geocoded
/// before being stored; a failed lookup still saves with a fallback address.
/// The body is read as JSON regardless of `Content-Type`.
#[utoipa::path(
    post,
    path = "/save_location",
    request_body = SaveLocationDto,
    responses(
        (status = 200, description = "Location saved", body = SaveLocationResponseDto),
        (status = 400, description = "Location outside Philippines", body = StatusResponse),
        (status = 500, description = "Database connection lost, malformed body or storage failure", body = StatusResponse)
    ),
    tag = "locations"
)]
pub async fn save_location(
    State(service): State<Arc<LocationService>>,
    body: Bytes,
) -> Result<Json<SaveLocationResponseDto>> {
    let saved = service.save(&body).await?;
    Ok(Json(saved))
}

/// List the most recent saved locations, newest first
#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "Up to 50 most recent locations", body = Vec<LocationResponseDto>),
        (status = 500, description = "Database connection lost or storage failure", body = StatusResponse)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<Vec<LocationResponseDto>>> {
    let locations = service.list_recent().await?;
    Ok(Json(locations))
}
