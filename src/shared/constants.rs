/// Number of records returned by the location history endpoint
pub const RECENT_LOCATIONS_LIMIT: i64 = 50;

/// MongoDB collection holding saved locations
pub const LOCATIONS_COLLECTION: &str = "locations";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_LOCATION_SAVED: &str = "Location saved";

pub const MSG_OUTSIDE_REGION: &str = "Location outside Philippines";

pub const MSG_DATABASE_CONNECTION_LOST: &str = "Database connection lost";

pub const MSG_NOT_FOUND: &str = "Not found";

pub const MSG_INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub const MSG_REQUEST_TIMEOUT: &str = "Request timed out";

// =============================================================================
// GEOCODING SENTINELS
// =============================================================================

/// `full_address` when the provider answered without a match
pub const ADDRESS_NOT_FOUND: &str = "Location not found";

/// `full_address` when the provider could not be reached or parsed
pub const ADDRESS_LOOKUP_FAILED: &str = "Location lookup failed";
