use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::locations::models::{Address, LocationRecord};
use crate::shared::constants::MSG_LOCATION_SAVED;
use crate::shared::types::ResponseStatus;

/// Request body for saving a location
///
/// Components are kept as raw JSON so that missing or non-numeric values
/// reach the region check instead of failing deserialization.
#[derive(Debug, Clone, ToSchema)]
pub struct SaveLocationDto {
    #[schema(value_type = f64, example = 14.5995)]
    pub latitude: Value,

    #[schema(value_type = f64, example = 120.9842)]
    pub longitude: Value,
}

impl SaveLocationDto {
    /// Parse a request body, whatever its declared content type.
    ///
    /// The body must be a JSON object; its `latitude` and `longitude` keys
    /// are taken as-is and default to `null` when absent.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let mut object = serde_json::from_slice::<Map<String, Value>>(body)
            .map_err(|e| AppError::MalformedBody(e.to_string()))?;

        Ok(Self {
            latitude: object.remove("latitude").unwrap_or_default(),
            longitude: object.remove("longitude").unwrap_or_default(),
        })
    }
}

/// Response body of a successful save
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveLocationResponseDto {
    pub status: ResponseStatus,
    pub message: String,
    pub id: String,
    pub address: Address,
}

impl SaveLocationResponseDto {
    pub fn saved(id: String, address: Address) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: MSG_LOCATION_SAVED.to_string(),
            id,
            address,
        }
    }
}

/// A saved location as returned by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub timestamp: DateTime<Utc>,
}

impl From<LocationRecord> for LocationResponseDto {
    fn from(record: LocationRecord) -> Self {
        Self {
            id: record.id,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
            timestamp: record.timestamp,
        }
    }
}
