use utoipa::OpenApi;

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::locations::models::Address;
use crate::shared::types::{ErrorBody, ResponseStatus, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Location Tracker API",
        description = "Save geocoded locations inside the Philippines and list recent history"
    ),
    paths(
        locations_handlers::save_location,
        locations_handlers::list_locations,
    ),
    components(
        schemas(
            // Shared
            ResponseStatus,
            ErrorBody,
            StatusResponse,
            // Locations
            Address,
            locations_dtos::SaveLocationDto,
            locations_dtos::SaveLocationResponseDto,
            locations_dtos::LocationResponseDto,
        )
    ),
    tags(
        (name = "locations", description = "Location capture and history")
    )
)]
pub struct ApiDoc;
