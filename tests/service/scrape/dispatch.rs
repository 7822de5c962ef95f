//! Payload validation and upstream failures.

use rallylink::server::error::{scrape::ScrapeError, Error};

use super::*;

/// Expect a stage 1 payload without sectionName to fail before any fetch
#[tokio::test]
async fn missing_field_fails_fast() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();
    let payload = StagePayload {
        year: Some("2025".to_string()),
        league_type: Some("Adult 18 & Over".to_string()),
        ..Default::default()
    };

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service.dispatch(1, payload).await;

    assert!(matches!(
        result,
        Err(Error::ScrapeError(ScrapeError::MissingField("sectionName")))
    ));
    unreachable.assert();

    Ok(())
}

/// Expect a stage 6 payload without a team name to fail before any fetch or write
#[tokio::test]
async fn roster_missing_team_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();
    let payload = StagePayload {
        href: Some("/Team.aspx?id=7".to_string()),
        gender: Some("Female".to_string()),
        team_name: Some("   ".to_string()),
        ..Default::default()
    };

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service.dispatch(6, payload).await;

    assert!(matches!(
        result,
        Err(Error::ScrapeError(ScrapeError::MissingField("teamName")))
    ));
    unreachable.assert();

    Ok(())
}

/// Expect stage 7 to be rejected without touching the network or the store
///
/// No tables are created, so any database access would fail with a different error.
#[tokio::test]
async fn unknown_stage_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unreachable = test.page().create_unreachable_endpoint();

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(7, href_payload("/Team.aspx?id=7"))
        .await;

    assert!(matches!(
        result,
        Err(Error::ScrapeError(ScrapeError::InvalidStage(7)))
    ));
    unreachable.assert();

    Ok(())
}

/// Expect a non-success upstream status to abort the stage
#[tokio::test]
async fn upstream_status_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_status_endpoint("/Team.aspx?id=7", 500, 1)
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(
            6,
            StagePayload {
                href: Some("/Team.aspx?id=7".to_string()),
                gender: Some("Female".to_string()),
                team_name: Some("Net Results".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ScrapeError(ScrapeError::UpstreamStatus { .. }))
    ));
    test.assert_mocks();

    Ok(())
}
