//! REST API for vehicle storage allocation.
//!
//! Provides endpoints for:
//! - Storing a vehicle request and getting ranked feasible locations
//! - Catalog visibility (locations and listing counts)
//! - Demo catalog retrieval
//! - Swagger UI at /q/swagger-ui

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::allocation::find_storages;
use crate::catalog::Catalog;
use crate::demo_data::{available_catalogs, generate_by_name};
use crate::domain::Listing;
use crate::dto::{
    to_domain_items, AllocationResultDto, ErrorResponse, HealthResponse, InfoResponse,
    LocationSummaryDto, VehicleRequestItemDto,
};

/// Application state shared across handlers.
///
/// The catalog is loaded once at startup and never mutated, so handlers can
/// read it without locking.
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        app_info,
        store_vehicles,
        list_locations,
        list_demo_catalogs,
        get_demo_catalog
    ),
    components(schemas(
        VehicleRequestItemDto,
        AllocationResultDto,
        LocationSummaryDto,
        Listing,
        HealthResponse,
        InfoResponse,
        ErrorResponse
    ))
)]
struct ApiDoc;

/// Creates the API router with CORS and Swagger UI enabled.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & Info
        .route("/health", get(health))
        .route("/info", get(app_info))
        // Allocation
        .route("/store-vehicles", post(store_vehicles))
        // Catalog
        .route("/locations", get(list_locations))
        // Demo data
        .route("/demo-data", get(list_demo_catalogs))
        .route("/demo-data/{name}", get(get_demo_catalog))
        .merge(SwaggerUi::new("/q/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

// ============================================================================
// Health & Info
// ============================================================================

/// GET /health - Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

/// GET /info - Application info endpoint.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = 200, description = "Application info", body = InfoResponse))
)]
async fn app_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "Vehicle Storage",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Allocation
// ============================================================================

/// POST /store-vehicles - Rank the locations that can store the request.
///
/// The body is an array of length/quantity pairs. Returns the feasible
/// locations sorted cheapest first; an empty array means no location can
/// hold the full request.
#[utoipa::path(
    post,
    path = "/store-vehicles",
    request_body = Vec<VehicleRequestItemDto>,
    responses(
        (status = 200, description = "Ranked feasible allocations", body = Vec<AllocationResultDto>),
        (status = 400, description = "Malformed request item", body = ErrorResponse)
    )
)]
async fn store_vehicles(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<VehicleRequestItemDto>>,
) -> Result<Json<Vec<AllocationResultDto>>, (StatusCode, Json<ErrorResponse>)> {
    let items = to_domain_items(&items).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let results = find_storages(&items, &state.catalog);
    info!(
        item_count = items.len(),
        feasible_locations = results.len(),
        "allocation request served"
    );

    Ok(Json(results.into_iter().map(Into::into).collect()))
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /locations - List catalog locations with their listing counts.
#[utoipa::path(
    get,
    path = "/locations",
    responses((status = 200, description = "Catalog locations", body = Vec<LocationSummaryDto>))
)]
async fn list_locations(State(state): State<Arc<AppState>>) -> Json<Vec<LocationSummaryDto>> {
    let summaries = state
        .catalog
        .locations()
        .iter()
        .map(|location| LocationSummaryDto {
            id: location.id.clone(),
            listing_count: location.listings.len(),
        })
        .collect();
    Json(summaries)
}

// ============================================================================
// Demo Data
// ============================================================================

/// GET /demo-data - List available demo catalog names.
#[utoipa::path(
    get,
    path = "/demo-data",
    responses((status = 200, description = "List of demo catalog names", body = Vec<String>))
)]
async fn list_demo_catalogs() -> Json<Vec<&'static str>> {
    Json(available_catalogs().to_vec())
}

/// GET /demo-data/{name} - Get a demo catalog as a listing array.
///
/// The response has the same shape as a catalog file, so it can be saved
/// and fed back through `CATALOG_PATH`.
#[utoipa::path(
    get,
    path = "/demo-data/{name}",
    params(("name" = String, Path, description = "Demo catalog name")),
    responses(
        (status = 200, description = "Demo catalog retrieved", body = Vec<Listing>),
        (status = 404, description = "Catalog not found")
    )
)]
async fn get_demo_catalog(Path(name): Path<String>) -> Result<Json<Vec<Listing>>, StatusCode> {
    match generate_by_name(&name) {
        Some(listings) => Ok(Json(listings)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
