use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use mongodb::bson::oid::ObjectId;

use crate::core::database::StoreError;
use crate::features::locations::models::{GeocodeOutcome, LocationRecord, NewLocation};
use crate::features::locations::services::{
    LocationRepository, LocationService, ReverseGeocoder,
};

/// Location store kept in process memory, with a switch to simulate outages
pub struct InMemoryLocationStore {
    records: Mutex<Vec<LocationRecord>>,
    available: AtomicBool,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<LocationRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable(
                "Server selection timeout: No available servers".to_string(),
            ))
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn insert(&self, location: NewLocation) -> Result<String, StoreError> {
        self.check_available()?;
        let id = ObjectId::new().to_hex();
        self.records.lock().unwrap().push(LocationRecord {
            id: id.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address,
            timestamp: location.timestamp,
        });
        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<LocationRecord>, StoreError> {
        self.check_available()?;
        let mut records = self.records();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }
}

/// Geocoder that always answers with the same outcome
pub struct StubGeocoder {
    outcome: GeocodeOutcome,
}

impl StubGeocoder {
    pub fn new(outcome: GeocodeOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn reverse(&self, _latitude: f64, _longitude: f64) -> GeocodeOutcome {
        self.outcome.clone()
    }
}

/// Full application router over the given store and geocoder
pub fn test_app(
    store: Arc<InMemoryLocationStore>,
    geocoder: Arc<dyn ReverseGeocoder>,
) -> Router {
    let service = Arc::new(LocationService::new(store, geocoder));
    crate::core::router::build_router(service)
}
