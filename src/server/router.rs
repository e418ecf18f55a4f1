//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET/POST /api/allocations/{mode}` - List / create allocation records
/// - `PUT/DELETE /api/allocations/{mode}/{id}` - Update / delete one record
/// - `POST /api/allocations/{mode}/bulk` - Atomically replace a collection
/// - `POST /api/allocations/sync` - Copy planning records into real mode
/// - `POST /api/migrate-shops` - Backfill catalog fields onto legacy records
/// - `GET /api/master-shops` (+ `/stats`, `/by-code/{code}`) - Master catalog
/// - `GET /api/districts`, `/api/excise-stations`, `/api/categories`
/// - `GET/PUT /api/settings/token-cap` - Global token cap
/// - `GET /api/reports/{mode}` - Print-ready report
/// - `GET /api/health` - Liveness check
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tokenboard", description = "Shop token allocation API"), tags(
        (name = controller::allocation::ALLOCATION_TAG, description = "Allocation record routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Master catalog routes"),
        (name = controller::settings::SETTINGS_TAG, description = "Settings routes"),
        (name = controller::report::REPORT_TAG, description = "Report routes"),
        (name = controller::health::HEALTH_TAG, description = "Health routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::allocation::sync_allocations))
        .routes(routes!(
            controller::allocation::get_allocations,
            controller::allocation::create_allocation
        ))
        .routes(routes!(
            controller::allocation::update_allocation,
            controller::allocation::delete_allocation
        ))
        .routes(routes!(controller::allocation::bulk_replace_allocations))
        .routes(routes!(controller::allocation::migrate_shops))
        .routes(routes!(controller::catalog::get_master_shops))
        .routes(routes!(controller::catalog::get_catalog_stats))
        .routes(routes!(controller::catalog::get_master_shop_by_code))
        .routes(routes!(controller::catalog::get_districts))
        .routes(routes!(controller::catalog::get_excise_stations))
        .routes(routes!(controller::catalog::get_categories))
        .routes(routes!(
            controller::settings::get_token_cap,
            controller::settings::put_token_cap
        ))
        .routes(routes!(controller::report::get_report))
        .routes(routes!(controller::health::get_health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
