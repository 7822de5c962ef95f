//! HTTP routing and OpenAPI documentation configuration.
//!
//! The scrape endpoint is registered with its utoipa annotations, collected into one
//! OpenAPI document served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with the API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/scrape` - Run one stage of the catalog walk
///
/// # Returns
/// An Axum `Router<AppState>` ready to have its state attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Rallylink", description = "Rallylink API"),
        modifiers(&BearerSecurity),
        tags((name = controller::scrape::SCRAPE_TAG, description = "Catalog scrape routes"))
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::scrape::scrape))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
