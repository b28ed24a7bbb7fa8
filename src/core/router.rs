use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;

use crate::core::middleware;
use crate::core::openapi::ApiDoc;
use crate::features::locations::{routes as locations_routes, LocationService};
use crate::features::pages::routes as pages_routes;

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Application routes with the 404 fallback and panic guard.
///
/// Transport layers (CORS, tracing, timeouts) are added by `main`.
pub fn build_router(location_service: Arc<LocationService>) -> Router {
    Router::new()
        .merge(pages_routes::routes())
        .merge(locations_routes::routes(location_service))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(middleware::not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
}
