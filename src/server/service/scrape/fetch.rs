//! Outbound HTTP for the stage scraper.
//!
//! Every stage issues exactly one GET. There is no retry and no caching; a failed fetch
//! aborts the stage.

use crate::server::{error::scrape::ScrapeError, model::stage::ListingQuery};

/// Path of the league listing page, relative to the catalog host.
pub static LISTING_PATH: &str = "StatsAndStandings.aspx";

/// What a stage asks the catalog for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchTarget {
    /// The league listing, filtered by query string (stage 1)
    Listing(ListingQuery),
    /// A link scraped by a previous stage (stages 2 to 6)
    Link(String),
}

/// Thin wrapper around a [`reqwest::Client`] bound to the catalog host.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    /// Creates a new instance of [`Fetcher`]
    ///
    /// Trailing slashes on `base_url` are dropped so hrefs can be joined with a single `/`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for the target, without the listing query string.
    pub fn url_for(&self, target: &FetchTarget) -> String {
        match target {
            FetchTarget::Listing(_) => format!("{}/{}", self.base_url, LISTING_PATH),
            FetchTarget::Link(href) => format!("{}/{}", self.base_url, href.trim_start_matches('/')),
        }
    }

    /// Fetches the target and returns the response body.
    ///
    /// # Returns
    /// - `Ok(String)` - Body of a 2xx response
    /// - `Err(ScrapeError::UpstreamStatus)` - The catalog answered with a non-success status
    /// - `Err(ScrapeError::UpstreamFetch)` - DNS, connection, timeout or body read failure
    pub async fn fetch(&self, target: &FetchTarget) -> Result<String, ScrapeError> {
        let url = self.url_for(target);

        let request = match target {
            FetchTarget::Listing(query) => self.client.get(&url).query(&[
                ("year", query.year.as_str()),
                ("lt", query.league_type.as_str()),
                ("section", query.section_name.as_str()),
            ]),
            FetchTarget::Link(_) => self.client.get(&url),
        };

        tracing::debug!(url = %url, "Fetching catalog page");

        let response = request.send().await.map_err(|source| {
            tracing::warn!(url = %url, error = %source, "Catalog request failed");

            ScrapeError::UpstreamFetch {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Catalog returned non-success status");

            return Err(ScrapeError::UpstreamStatus { url, status });
        }

        response
            .text()
            .await
            .map_err(|source| ScrapeError::UpstreamFetch { url, source })
    }
}
