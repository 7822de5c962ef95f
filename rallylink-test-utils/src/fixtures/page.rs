//! Catalog page fixtures.
//!
//! The factory functions build minimal HTML in the shape the catalog serves for each
//! stage. The [`PageFixtures`] methods register those pages on the mock server.

use mockito::{Matcher, Mock};

use crate::TestContext;

/// Path of the league listing page on the mock host.
pub static LISTING_PATH: &str = "/StatsAndStandings.aspx";

impl TestContext {
    pub fn page<'a>(&'a mut self) -> PageFixtures<'a> {
        PageFixtures { setup: self }
    }
}

pub struct PageFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PageFixtures<'a> {
    /// Serve an HTML page at `path`, which may include a query string.
    pub fn create_page_endpoint(&mut self, path: &str, body: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Answer requests for `path` with `status` and an empty body.
    pub fn create_status_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Serve the league listing for one year, league type and section.
    ///
    /// Any request to the listing path with a different query is left unmatched.
    pub fn create_listing_endpoint(
        &mut self,
        year: &str,
        league_type: &str,
        section: &str,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", LISTING_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("year".into(), year.into()),
                Matcher::UrlEncoded("lt".into(), league_type.into()),
                Matcher::UrlEncoded("section".into(), section.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Register a catch-all endpoint that must never be hit.
    ///
    /// Used to prove a request was rejected before any outbound fetch.
    pub fn create_unreachable_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .expect(0)
            .create()
    }
}

/// Page listing the given `(text, href)` anchors.
pub fn link_page(links: &[(&str, &str)]) -> String {
    let anchors: String = links
        .iter()
        .map(|(text, href)| format!("<li><a href=\"{}\">{}</a></li>", href, text))
        .collect();

    format!(
        "<html><body><a href=\"/Help.aspx\">Help</a><ul>{}</ul></body></html>",
        anchors
    )
}

/// Cells of a flight listing row, league name linked to `href`.
pub fn flight_row(league_name: &str, flight: &str, sub_flight: &str, teams: &str, href: &str) -> Vec<String> {
    vec![
        format!("<a href=\"{}\">{}</a>", href, league_name),
        flight.to_string(),
        sub_flight.to_string(),
        teams.to_string(),
    ]
}

/// Page with one flight table per entry of `tables`.
pub fn flights_page(tables: &[Vec<Vec<String>>]) -> String {
    let tables: String = tables
        .iter()
        .map(|rows| {
            data_table(
                Some("stats-table"),
                &["League", "Flight", "Sub-Flight", "Teams"],
                rows,
            )
        })
        .collect();

    format!("<html><body>{}</body></html>", tables)
}

/// Cells of a team listing row with fixed ratings, team name linked to `href`.
pub fn team_row(team_name: &str, href: &str) -> Vec<String> {
    vec![
        format!("<a href=\"{}\">{}</a>", href, team_name),
        "14".to_string(),
        "3.41".to_string(),
        "3.22".to_string(),
        "3.30".to_string(),
    ]
}

/// Team listing page with the table inside the team container.
pub fn teams_page(rows: &[Vec<String>]) -> String {
    format!(
        "<html><body><div id=\"teams-container\">{}</div></body></html>",
        data_table(
            Some("stats-table"),
            &["Team", "Players", "Top 5", "Team Rating", "Court Rating"],
            rows,
        )
    )
}

/// Cells of a roster row padded to `cell_count` cells.
///
/// Location, NTRP and rating sit at cells 1, 2 and 10; the rating is only present when
/// `cell_count` exceeds 10.
pub fn roster_row(name: &str, href: &str, rating: &str, cell_count: usize) -> Vec<String> {
    (0..cell_count)
        .map(|i| match i {
            0 => format!("<a href=\"{}\">{}</a>", href, name),
            1 => "Atlanta, GA".to_string(),
            2 => "3.5C".to_string(),
            10 => rating.to_string(),
            _ => "-".to_string(),
        })
        .collect()
}

/// Roster page with the table inside the large content container.
pub fn roster_page(rows: &[Vec<String>]) -> String {
    let header = [
        "Name", "City", "NTRP", "W", "L", "Matches", "Singles", "Doubles", "Defaults", "Played",
        "Rating",
    ];

    format!(
        "<html><body><div class=\"container-large\">{}</div></body></html>",
        data_table(None, &header, rows)
    )
}

fn data_table(class: Option<&str>, header: &[&str], rows: &[Vec<String>]) -> String {
    let class = class
        .map(|class| format!(" class=\"{}\"", class))
        .unwrap_or_default();
    let header: String = header.iter().map(|h| format!("<th>{}</th>", h)).collect();
    let rows: String = rows
        .iter()
        .map(|cells| {
            let cells: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!("<table{}><tr>{}</tr>{}</table>", class, header, rows)
}
