use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    LocationResponseDto, SaveLocationDto, SaveLocationResponseDto,
};
use crate::features::locations::models::NewLocation;
use crate::features::locations::services::{LocationRepository, ReverseGeocoder};
use crate::shared::constants::RECENT_LOCATIONS_LIMIT;
use crate::shared::validation::{coordinate_within, PHILIPPINES};

/// Saves geocoded locations and serves the recent history
pub struct LocationService {
    store: Arc<dyn LocationRepository>,
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl LocationService {
    pub fn new(store: Arc<dyn LocationRepository>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { store, geocoder }
    }

    /// Parse, validate, geocode and persist a coordinate from a request body.
    ///
    /// Store reachability is checked before the body is even parsed. Geocoding
    /// misses degrade to a sentinel address; store failures abort the save.
    pub async fn save(&self, body: &[u8]) -> Result<SaveLocationResponseDto> {
        self.store.ping().await?;

        let dto = SaveLocationDto::from_json(body)?;
        let (latitude, longitude) = coordinate_within(&PHILIPPINES, &dto.latitude, &dto.longitude)
            .ok_or(AppError::OutsideRegion)?;

        let address = self
            .geocoder
            .reverse(latitude, longitude)
            .await
            .into_address();

        let id = self
            .store
            .insert(NewLocation {
                latitude,
                longitude,
                address: address.clone(),
                timestamp: Utc::now(),
            })
            .await?;

        tracing::info!("Location saved: {}", id);

        Ok(SaveLocationResponseDto::saved(id, address))
    }

    /// Most recent saved locations, newest first
    pub async fn list_recent(&self) -> Result<Vec<LocationResponseDto>> {
        let records = self.store.list_recent(RECENT_LOCATIONS_LIMIT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
