pub mod geocoding_service;
pub mod location_service;
pub mod location_store;

pub use geocoding_service::{NominatimGeocoder, ReverseGeocoder};
pub use location_service::LocationService;
pub use location_store::{LocationRepository, MongoLocationStore};
