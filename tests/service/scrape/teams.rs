//! Stage 5: team listings.

use rallylink::model::scrape::StageResult;

use super::*;

/// Expect every 5 cell team row to be returned in page order
#[tokio::test]
async fn teams_from_flight_page() -> Result<(), TestError> {
    let body = page::teams_page(&[
        page::team_row("Net Results", "/Team.aspx?id=7"),
        page::team_row("Drop Shots", "/Team.aspx?id=8"),
    ]);
    let test = TestBuilder::new()
        .with_page_endpoint("/Flight.aspx?id=1", body, 1)
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(5, href_payload("/Flight.aspx?id=1"))
        .await;

    let StageResult::Teams(teams) = result.unwrap() else {
        panic!("expected teams");
    };
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team_name, "Net Results");
    assert_eq!(teams[0].players, "14");
    assert_eq!(teams[0].top_5_rating, "3.41");
    assert_eq!(teams[0].team_rating, "3.22");
    assert_eq!(teams[0].court_rating, "3.30");
    assert_eq!(teams[1].href, "/Team.aspx?id=8");
    test.assert_mocks();

    Ok(())
}

/// Expect teams outside the team container to be ignored
#[tokio::test]
async fn teams_outside_container_ignored() -> Result<(), TestError> {
    let body = page::flights_page(&[vec![page::team_row("Net Results", "/Team.aspx?id=7")]]);
    let test = TestBuilder::new()
        .with_page_endpoint("/Flight.aspx?id=1", body, 1)
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(5, href_payload("/Flight.aspx?id=1"))
        .await;

    assert!(result.unwrap().is_empty());
    test.assert_mocks();

    Ok(())
}
