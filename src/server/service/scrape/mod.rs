//! Stage dispatch for the catalog scraper.
//!
//! A dispatch validates the payload into a [`StageRequest`], fetches exactly one page,
//! applies the stage's extraction rule and, for the roster stage, reconciles the result
//! into the store.

pub mod extract;
pub mod fetch;

use sea_orm::DatabaseConnection;

use crate::{
    model::scrape::{PlayerDto, StagePayload, StageResult},
    server::{
        error::Error,
        model::stage::{RosterRequest, StageRequest},
        service::{
            roster::RosterService,
            scrape::fetch::{FetchTarget, Fetcher},
        },
    },
};

pub struct ScrapeService<'a> {
    db: &'a DatabaseConnection,
    fetcher: &'a Fetcher,
}

impl<'a> ScrapeService<'a> {
    /// Creates a new instance of [`ScrapeService`]
    pub fn new(db: &'a DatabaseConnection, fetcher: &'a Fetcher) -> Self {
        Self { db, fetcher }
    }

    /// Validates the payload for `stage` and runs it.
    ///
    /// Validation happens before any network or database access, an invalid stage or a
    /// missing field returns without side effects.
    ///
    /// # Returns
    /// - `Ok(StageResult)` - Records for the stage, possibly empty
    /// - `Err(Error::ScrapeError)` - Invalid stage, missing field, or upstream failure
    /// - `Err(Error::DbErr)` - Stage 6 reconciliation failed and was rolled back
    pub async fn dispatch(&self, stage: i64, payload: StagePayload) -> Result<StageResult, Error> {
        let request = StageRequest::parse(stage, payload)?;

        self.run(request).await
    }

    /// Runs an already validated stage request.
    #[tracing::instrument(skip(self, request), fields(stage = request.stage()))]
    pub async fn run(&self, request: StageRequest) -> Result<StageResult, Error> {
        let result = match request {
            StageRequest::Districts(query) => {
                let body = self.fetcher.fetch(&FetchTarget::Listing(query)).await?;
                StageResult::Districts(extract::districts(&body)?)
            }
            StageRequest::Areas(link) => {
                let body = self.fetcher.fetch(&FetchTarget::Link(link.href)).await?;
                StageResult::Areas(extract::areas(&body)?)
            }
            StageRequest::Genders(link) => {
                let body = self.fetcher.fetch(&FetchTarget::Link(link.href)).await?;
                StageResult::Genders(extract::genders(&body)?)
            }
            StageRequest::Flights(link) => {
                let body = self.fetcher.fetch(&FetchTarget::Link(link.href)).await?;
                StageResult::Flights(extract::flights(&body)?)
            }
            StageRequest::Teams(link) => {
                let body = self.fetcher.fetch(&FetchTarget::Link(link.href)).await?;
                StageResult::Teams(extract::teams(&body)?)
            }
            StageRequest::Roster(roster) => StageResult::Players(self.roster(roster).await?),
        };

        tracing::info!("Stage returned {} records", result.len());

        Ok(result)
    }

    async fn roster(&self, request: RosterRequest) -> Result<Vec<PlayerDto>, Error> {
        let RosterRequest {
            href,
            gender,
            team_name,
        } = request;

        let body = self.fetcher.fetch(&FetchTarget::Link(href)).await?;
        let scraped = extract::roster(&body)?;

        let players = RosterService::new(self.db)
            .reconcile(&team_name, &gender, scraped)
            .await?;

        Ok(players.into_iter().map(PlayerDto::from).collect())
    }
}
