use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocoderConfig;
use crate::features::locations::models::{Address, GeocodeOutcome};

/// Turns a coordinate into a place description
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeOutcome;
}

/// Nominatim `/reverse` response structure
///
/// When nothing is found Nominatim still answers 200, with an `error` field
/// and no `display_name`.
#[derive(Debug, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
}

/// Nominatim address components
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub municipality: Option<String>,
    pub village: Option<String>,
    pub province: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl NominatimAddress {
    /// Get city, falling back to town, municipality or village
    pub fn get_city(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.municipality.clone())
            .or_else(|| self.village.clone())
    }

    /// Get province, falling back to state or region
    ///
    /// Philippine results frequently carry only `state` or `region`.
    pub fn get_province(&self) -> Option<String> {
        self.province
            .clone()
            .or_else(|| self.state.clone())
            .or_else(|| self.region.clone())
    }
}

impl NominatimReverseResponse {
    pub fn into_outcome(self) -> GeocodeOutcome {
        let Some(full_address) = self.display_name else {
            return GeocodeOutcome::NotFound;
        };

        let components = self.address.unwrap_or_default();
        GeocodeOutcome::Found(Address {
            full_address,
            city: components.get_city().unwrap_or_default(),
            province: components.get_province().unwrap_or_default(),
            country: components.country.unwrap_or_default(),
            postcode: components.postcode.unwrap_or_default(),
        })
    }
}

/// Reverse geocoder backed by OpenStreetMap Nominatim
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn execute_request(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodeOutcome, reqwest::Error> {
        let url = format!("{}/reverse", self.base_url);
        tracing::debug!("Reverse geocoding: ({}, {}) -> {}", latitude, longitude, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Ok(GeocodeOutcome::NotFound);
        }

        let body: NominatimReverseResponse = response.json().await?;
        Ok(body.into_outcome())
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeOutcome {
        match self.execute_request(latitude, longitude).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Address lookup error: {}", e);
                GeocodeOutcome::LookupFailed
            }
        }
    }
}
