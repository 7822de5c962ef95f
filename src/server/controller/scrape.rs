use axum::{extract::State, Json};

use crate::{
    model::{
        api::ErrorDto,
        scrape::{ScrapeRequestDto, StageResult},
    },
    server::{
        controller::auth::AdminCaller,
        error::Error,
        model::app::AppState,
        service::scrape::ScrapeService,
    },
};

pub static SCRAPE_TAG: &str = "scrape";

/// Run one navigation stage against the league catalog
///
/// Stages 1 to 5 return the links or rows found on the fetched page. Stage 6 also stores
/// the roster and returns the persisted players.
#[utoipa::path(
    post,
    path = "/api/scrape",
    tag = SCRAPE_TAG,
    request_body = ScrapeRequestDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Records scraped for the stage", body = StageResult),
        (status = 400, description = "Unknown stage or missing payload field", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 502, description = "Catalog could not be fetched", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn scrape(
    State(state): State<AppState>,
    AdminCaller(caller): AdminCaller,
    Json(request): Json<ScrapeRequestDto>,
) -> Result<Json<StageResult>, Error> {
    tracing::info!(
        caller = %caller.username,
        "Running scrape stage {}",
        request.stage
    );

    let scrape_service = ScrapeService::new(&state.db, &state.fetcher);
    let result = scrape_service
        .dispatch(request.stage, request.payload)
        .await?;

    Ok(Json(result))
}
