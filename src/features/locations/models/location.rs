use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::Address;

/// A location about to be persisted
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub timestamp: DateTime<Utc>,
}

/// A persisted location with its store-assigned identifier
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub timestamp: DateTime<Utc>,
}

/// MongoDB document shape for the `locations` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub timestamp: bson::DateTime,
}

impl From<NewLocation> for LocationDocument {
    fn from(location: NewLocation) -> Self {
        Self {
            id: None,
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address,
            timestamp: bson::DateTime::from_millis(location.timestamp.timestamp_millis()),
        }
    }
}

impl From<LocationDocument> for LocationRecord {
    fn from(doc: LocationDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            latitude: doc.latitude,
            longitude: doc.longitude,
            address: doc.address,
            timestamp: DateTime::from_timestamp_millis(doc.timestamp.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_round_trip_keeps_millisecond_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let mut doc = LocationDocument::from(NewLocation {
            latitude: 14.5995,
            longitude: 120.9842,
            address: Address::sentinel("Manila"),
            timestamp,
        });
        assert!(doc.id.is_none());

        let oid = ObjectId::new();
        doc.id = Some(oid);
        let record = LocationRecord::from(doc);

        assert_eq!(record.id, oid.to_hex());
        assert_eq!(record.timestamp, timestamp);
        assert_eq!(record.address.full_address, "Manila");
    }

    #[test]
    fn test_new_document_serializes_without_id() {
        let doc = LocationDocument::from(NewLocation {
            latitude: 10.0,
            longitude: 123.9,
            address: Address::default(),
            timestamp: Utc::now(),
        });
        let bson_doc = bson::to_document(&doc).unwrap();
        assert!(!bson_doc.contains_key("_id"));
        assert!(bson_doc.get_datetime("timestamp").is_ok());
    }
}
