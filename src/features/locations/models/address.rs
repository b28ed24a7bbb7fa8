use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ADDRESS_LOOKUP_FAILED, ADDRESS_NOT_FOUND};

/// Structured address produced by reverse geocoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub full_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postcode: String,
}

impl Address {
    /// Address carrying only a `full_address` sentinel
    pub fn sentinel(full_address: &str) -> Self {
        Self {
            full_address: full_address.to_string(),
            ..Default::default()
        }
    }
}

/// Result of a reverse geocoding lookup
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Found(Address),
    /// The provider answered but has no place for the coordinate
    NotFound,
    /// The provider could not be reached or its answer could not be read
    LookupFailed,
}

impl GeocodeOutcome {
    /// Collapse the outcome into an address, using sentinels for the misses
    pub fn into_address(self) -> Address {
        match self {
            GeocodeOutcome::Found(address) => address,
            GeocodeOutcome::NotFound => Address::sentinel(ADDRESS_NOT_FOUND),
            GeocodeOutcome::LookupFailed => Address::sentinel(ADDRESS_LOOKUP_FAILED),
        }
    }
}
