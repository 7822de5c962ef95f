//! Stage 4: flight listings.

use rallylink::model::scrape::{FlightDto, StageResult};

use super::*;

/// Expect rows of the last table only, with 3 cell rows dropped
#[tokio::test]
async fn flights_from_last_table() -> Result<(), TestError> {
    let body = page::flights_page(&[
        vec![page::flight_row("All Leagues", "3.5", "A", "12", "/Flight.aspx?id=0")],
        vec![
            page::flight_row("Adult 18+ Women", "3.5", "A", "8", "/Flight.aspx?id=1"),
            vec!["Adult 40+".to_string(), "4.0".to_string(), "B".to_string()],
        ],
    ]);
    let test = TestBuilder::new()
        .with_page_endpoint("/LeagueFind.aspx?g=F", body, 1)
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(4, href_payload("LeagueFind.aspx?g=F"))
        .await;

    assert_eq!(
        result.unwrap(),
        StageResult::Flights(vec![FlightDto {
            league_name: "Adult 18+ Women".to_string(),
            flight: "3.5".to_string(),
            sub_flight: "A".to_string(),
            teams: "8".to_string(),
            href: "/Flight.aspx?id=1".to_string(),
        }])
    );
    test.assert_mocks();

    Ok(())
}

/// Expect an empty result when the page has no flight table
#[tokio::test]
async fn no_table_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_page_endpoint("/LeagueFind.aspx?g=F", "<html><body>No leagues</body></html>", 1)
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(4, href_payload("LeagueFind.aspx?g=F"))
        .await;

    assert_eq!(result.unwrap(), StageResult::Flights(Vec::new()));
    test.assert_mocks();

    Ok(())
}
