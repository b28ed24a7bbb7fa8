//! Location capture and history.
//!
//! Coordinates posted by the client are checked against the Philippines
//! bounding box, reverse-geocoded through Nominatim and stored in MongoDB.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/save_location` | Validate, geocode and save a coordinate |
//! | GET | `/locations` | 50 most recent saved locations |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{LocationService, MongoLocationStore, NominatimGeocoder};
