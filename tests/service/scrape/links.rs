//! Stages 1 to 3: link listings.

use rallylink::{
    model::scrape::{LinkDto, StageResult},
    server::service::scrape::fetch::Fetcher,
};

use super::*;

fn listing_payload() -> StagePayload {
    StagePayload {
        year: Some("2025".to_string()),
        league_type: Some("Adult 18 & Over".to_string()),
        section_name: Some("Southern".to_string()),
        ..Default::default()
    }
}

/// Expect stage 1 to query the listing page and return district links only
#[tokio::test]
async fn districts_from_listing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let body = page::link_page(&[
        ("Georgia", "StatsAndStandings.aspx?t=R-3&par1=GA"),
        ("Florida", "StatsAndStandings.aspx?t=R-3&par1=FL"),
        ("Archive", "Archive.aspx"),
    ]);
    let listing = test.page().create_listing_endpoint(
        "2025",
        "Adult 18 & Over",
        "Southern",
        &body,
        1,
    );

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service.dispatch(1, listing_payload()).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap(),
        StageResult::Districts(vec![
            LinkDto {
                text: "Georgia".to_string(),
                href: "StatsAndStandings.aspx?t=R-3&par1=GA".to_string(),
            },
            LinkDto {
                text: "Florida".to_string(),
                href: "StatsAndStandings.aspx?t=R-3&par1=FL".to_string(),
            },
        ])
    );
    listing.assert();

    Ok(())
}

/// Expect the `lt` alias to be accepted for the league type
#[tokio::test]
async fn districts_accepts_lt_alias() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let listing = test.page().create_listing_endpoint(
        "2025",
        "Adult 18 & Over",
        "Southern",
        &page::link_page(&[]),
        1,
    );
    let payload: StagePayload = serde_json::from_value(serde_json::json!({
        "year": "2025",
        "lt": "Adult 18 & Over",
        "sectionName": "Southern",
    }))
    .unwrap();

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service.dispatch(1, payload).await;

    assert!(matches!(result, Ok(StageResult::Districts(links)) if links.is_empty()));
    listing.assert();

    Ok(())
}

/// Expect stage 2 to follow the href and return area links
#[tokio::test]
async fn areas_from_district_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_page_endpoint(
            "/District.aspx?par1=GA",
            page::link_page(&[
                ("Atlanta", "StatsAndStandings.aspx?t=R-4&par2=ATL"),
                ("Georgia", "StatsAndStandings.aspx?t=R-3&par1=GA"),
            ]),
            1,
        )
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(2, href_payload("District.aspx?par1=GA"))
        .await;

    assert_eq!(
        result.unwrap(),
        StageResult::Areas(vec![LinkDto {
            text: "Atlanta".to_string(),
            href: "StatsAndStandings.aspx?t=R-4&par2=ATL".to_string(),
        }])
    );
    test.assert_mocks();

    Ok(())
}

/// Expect stage 3 to return gender links
#[tokio::test]
async fn genders_from_area_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_page_endpoint(
            "/Area.aspx?par2=ATL",
            page::link_page(&[
                ("Female", "LeagueFind.aspx?g=F"),
                ("Male", "LeagueFind.aspx?g=M"),
            ]),
            1,
        )
        .build()
        .await?;

    let fetcher = test.fetcher();
    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(3, href_payload("/Area.aspx?par2=ATL"))
        .await;

    let StageResult::Genders(links) = result.unwrap() else {
        panic!("expected genders");
    };
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].text, "Female");
    assert_eq!(links[1].href, "LeagueFind.aspx?g=M");
    test.assert_mocks();

    Ok(())
}

/// Expect the fetch to carry the client's user agent
#[tokio::test]
async fn fetch_sends_user_agent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/District.aspx?par1=GA")
                .match_header("user-agent", constant::TEST_USER_AGENT)
                .with_status(200)
                .with_body(page::link_page(&[]))
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let client = reqwest::Client::builder()
        .user_agent(constant::TEST_USER_AGENT)
        .build()
        .unwrap();
    let fetcher = Fetcher::new(client, test.server_url());

    let scrape_service = ScrapeService::new(&test.db, &fetcher);
    let result = scrape_service
        .dispatch(2, href_payload("District.aspx?par1=GA"))
        .await;

    assert_eq!(result.unwrap(), StageResult::Areas(Vec::new()));
    test.assert_mocks();

    Ok(())
}
