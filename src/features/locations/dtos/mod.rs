pub mod location_dto;

pub use location_dto::*;
