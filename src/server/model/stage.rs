//! Typed stage requests.
//!
//! The catalog is walked in six fixed steps. Each step needs a different set of payload
//! fields, so the raw [`StagePayload`] is validated once into a [`StageRequest`] variant
//! that carries exactly the fields its stage needs.

use crate::{model::scrape::StagePayload, server::error::scrape::ScrapeError};

/// Query for the league listing page (stage 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub year: String,
    pub league_type: String,
    pub section_name: String,
}

/// Request that follows a link scraped by the previous stage (stages 2 to 5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRequest {
    pub href: String,
}

/// Roster request (stage 6). The team name and gender are not on the roster page
/// itself and are carried over from earlier stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRequest {
    pub href: String,
    pub gender: String,
    pub team_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageRequest {
    /// 1: league listing → districts
    Districts(ListingQuery),
    /// 2: district page → areas
    Areas(LinkRequest),
    /// 3: area page → genders
    Genders(LinkRequest),
    /// 4: gender page → flights
    Flights(LinkRequest),
    /// 5: flight page → teams
    Teams(LinkRequest),
    /// 6: team page → roster, reconciled into the store
    Roster(RosterRequest),
}

impl StageRequest {
    /// Validates `payload` against the fields required by `stage`.
    ///
    /// Fields are checked in the order they are documented for the stage, so the error
    /// names the first missing one. Blank strings count as missing; present values are
    /// passed through as sent.
    ///
    /// # Returns
    /// - `Ok(StageRequest)` - Typed request for the stage
    /// - `Err(ScrapeError::InvalidStage)` - `stage` is not between 1 and 6
    /// - `Err(ScrapeError::MissingField)` - A required field is absent or blank
    pub fn parse(stage: i64, payload: StagePayload) -> Result<Self, ScrapeError> {
        let StagePayload {
            year,
            league_type,
            section_name,
            href,
            gender,
            team_name,
        } = payload;

        let request = match stage {
            1 => Self::Districts(ListingQuery {
                year: required(year, "year")?,
                league_type: required(league_type, "leagueType")?,
                section_name: required(section_name, "sectionName")?,
            }),
            2 => Self::Areas(LinkRequest {
                href: required(href, "href")?,
            }),
            3 => Self::Genders(LinkRequest {
                href: required(href, "href")?,
            }),
            4 => Self::Flights(LinkRequest {
                href: required(href, "href")?,
            }),
            5 => Self::Teams(LinkRequest {
                href: required(href, "href")?,
            }),
            6 => Self::Roster(RosterRequest {
                href: required(href, "href")?,
                gender: required(gender, "gender")?,
                team_name: required(team_name, "teamName")?,
            }),
            other => return Err(ScrapeError::InvalidStage(other)),
        };

        Ok(request)
    }

    /// Stage number this request belongs to.
    pub fn stage(&self) -> u8 {
        match self {
            Self::Districts(_) => 1,
            Self::Areas(_) => 2,
            Self::Genders(_) => 3,
            Self::Flights(_) => 4,
            Self::Teams(_) => 5,
            Self::Roster(_) => 6,
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ScrapeError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ScrapeError::MissingField(field)),
    }
}
