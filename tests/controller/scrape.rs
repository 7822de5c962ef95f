//! Tests for the scrape endpoint.
//!
//! Handler tests call `scrape` directly with an already resolved caller. Authentication
//! and body parsing happen in extractors, so those are driven through the router.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rallylink::{
    model::scrape::{ScrapeRequestDto, StagePayload},
    server::{
        controller::{auth::AdminCaller, scrape::scrape},
        router,
        service::auth::Caller,
    },
};
use tower::ServiceExt;

use super::*;

fn admin() -> AdminCaller {
    AdminCaller(Caller {
        username: constant::TEST_ADMIN_USERNAME.to_string(),
    })
}

fn area_request(href: &str) -> ScrapeRequestDto {
    ScrapeRequestDto {
        stage: 2,
        payload: StagePayload {
            href: Some(href.to_string()),
            ..Default::default()
        },
    }
}

/// POST `body` to `/api/scrape` through the full router.
async fn post_scrape(
    test: &TestContext,
    authorization: Option<String>,
    body: serde_json::Value,
) -> Response {
    let app = router::routes().with_state(test.into_app_state());

    let mut request = Request::builder()
        .method("POST")
        .uri("/api/scrape")
        .header("content-type", "application/json");
    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }

    app.oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Expect 200 with the stage envelope for an admin caller
#[tokio::test]
async fn admin_gets_stage_result() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_page_endpoint(
            "/District.aspx?par1=GA",
            page::link_page(&[("Atlanta", "StatsAndStandings.aspx?t=R-4&par2=ATL")]),
            1,
        )
        .build()
        .await?;

    let result = scrape(
        State(test.into_app_state()),
        admin(),
        Json(area_request("District.aspx?par1=GA")),
    )
    .await;

    assert!(result.is_ok());
    let Json(stage_result) = result.unwrap();
    assert_eq!(
        serde_json::to_value(&stage_result).unwrap(),
        serde_json::json!({
            "areas": [{"text": "Atlanta", "href": "StatsAndStandings.aspx?t=R-4&par2=ATL"}]
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a missing payload field
#[tokio::test]
async fn missing_field_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = scrape(
        State(test.into_app_state()),
        admin(),
        Json(ScrapeRequestDto {
            stage: 4,
            payload: StagePayload::default(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for an unknown stage
#[tokio::test]
async fn invalid_stage_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = scrape(
        State(test.into_app_state()),
        admin(),
        Json(ScrapeRequestDto {
            stage: 0,
            payload: StagePayload::default(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 502 when the catalog answers with an error status
#[tokio::test]
async fn upstream_failure_bad_gateway() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("/District.aspx?par1=GA", 503, 1)
        .build()
        .await?;

    let result = scrape(
        State(test.into_app_state()),
        admin(),
        Json(area_request("District.aspx?par1=GA")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}

/// Expect the route to be mounted at POST /api/scrape
#[tokio::test]
async fn route_mounted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_page_endpoint("/District.aspx?par1=GA", page::link_page(&[]), 1)
        .build()
        .await?;
    let token = auth::admin_token()?;

    let resp = post_scrape(
        &test,
        Some(auth::bearer(&token)),
        serde_json::json!({"stage": 2, "payload": {"href": "District.aspx?par1=GA"}}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Expect 401 without an Authorization header and no outbound fetch
#[tokio::test]
async fn missing_token_unauthorized() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();

    let resp = post_scrape(
        &test,
        None,
        serde_json::json!({"stage": 2, "payload": {"href": "District.aspx?par1=GA"}}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()["www-authenticate"], "Bearer");
    unreachable.assert();

    Ok(())
}

/// Expect 401 rather than a body error when an unauthenticated request is also malformed
#[tokio::test]
async fn missing_token_checked_before_body() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = post_scrape(&test, None, serde_json::json!({"stage": 300})).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()["www-authenticate"], "Bearer");

    let resp = post_scrape(&test, None, serde_json::json!({"stage": "roster"})).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for an expired token
#[tokio::test]
async fn expired_token_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let token = auth::token(constant::TEST_ADMIN_USERNAME, "admin", -3600)?;

    let resp = post_scrape(
        &test,
        Some(auth::bearer(&token)),
        serde_json::json!({"stage": 2, "payload": {"href": "District.aspx?par1=GA"}}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 for a valid token without the admin role
#[tokio::test]
async fn non_admin_forbidden() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();
    let token = auth::token("player", "user", 900)?;

    let resp = post_scrape(
        &test,
        Some(auth::bearer(&token)),
        serde_json::json!({"stage": 2, "payload": {"href": "District.aspx?par1=GA"}}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    unreachable.assert();

    Ok(())
}

/// Expect out-of-range stages to be answered 400 with a JSON error naming the stage
#[tokio::test]
async fn out_of_range_stage_bad_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();
    let token = auth::admin_token()?;

    for (stage, expected) in [
        (serde_json::json!(256), "256"),
        (serde_json::json!(-1), "-1"),
        (serde_json::json!("7"), "7"),
    ] {
        let resp = post_scrape(
            &test,
            Some(auth::bearer(&token)),
            serde_json::json!({"stage": stage, "payload": {}}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert!(body["error"].as_str().unwrap().contains(expected));
    }
    unreachable.assert();

    Ok(())
}

/// Expect a numeric year to be accepted for the listing stage
#[tokio::test]
async fn numeric_year_accepted() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let listing = test.page().create_listing_endpoint(
        "2025",
        "Adult 18 & Over",
        "Southern",
        &page::link_page(&[("Georgia", "StatsAndStandings.aspx?t=R-3&par1=GA")]),
        1,
    );
    let token = auth::admin_token()?;

    let resp = post_scrape(
        &test,
        Some(auth::bearer(&token)),
        serde_json::json!({
            "stage": 1,
            "payload": {"year": 2025, "lt": "Adult 18 & Over", "sectionName": "Southern"}
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({
            "districts": [{"text": "Georgia", "href": "StatsAndStandings.aspx?t=R-3&par1=GA"}]
        })
    );
    listing.assert();

    Ok(())
}
