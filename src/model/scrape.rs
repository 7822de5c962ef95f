//! Request and response bodies for the stage dispatch endpoint.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Body of `POST /api/scrape`.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScrapeRequestDto {
    /// Navigation stage, 1 through 6. Numeric strings are accepted; any other integer is
    /// rejected as an invalid stage when the payload is validated.
    #[serde(deserialize_with = "stage_number")]
    pub stage: i64,
    /// Stage specific fields, see [`StagePayload`]
    #[serde(default)]
    pub payload: StagePayload,
}

/// Free-form payload accepted by every stage.
///
/// Which fields are required depends on the stage; validation happens when the payload
/// is turned into a typed stage request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StagePayload {
    /// Season year, as a string or a bare number
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(alias = "lt")]
    pub league_type: Option<String>,
    pub section_name: Option<String>,
    pub href: Option<String>,
    pub gender: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

fn stage_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?.into_string();

    value
        .trim()
        .parse()
        .map_err(|_| de::Error::custom(format!("stage must be an integer, got {:?}", value)))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

/// A hyperlink scraped from a navigation page (stages 1 to 3).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkDto {
    pub text: String,
    pub href: String,
}

/// A row of the flight listing (stage 4).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlightDto {
    pub league_name: String,
    pub flight: String,
    pub sub_flight: String,
    /// Number of teams as printed on the page
    pub teams: String,
    pub href: String,
}

/// A row of the team listing for a flight (stage 5).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamDto {
    pub team_name: String,
    /// Number of rostered players as printed on the page
    pub players: String,
    pub top_5_rating: String,
    pub team_rating: String,
    pub court_rating: String,
    pub href: String,
}

/// A persisted roster player (stage 6).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub href: String,
    pub location: String,
    pub ntrp: String,
    pub rating: String,
    pub gender: String,
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            name: player.name,
            href: player.href,
            location: player.location,
            ntrp: player.ntrp,
            rating: player.rating,
            gender: player.gender,
        }
    }
}

/// Stage result envelope, keyed by what the stage returns.
///
/// Serializes externally tagged, e.g. `{"districts": [...]}` or `{"players": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageResult {
    Districts(Vec<LinkDto>),
    Areas(Vec<LinkDto>),
    Genders(Vec<LinkDto>),
    Flights(Vec<FlightDto>),
    Teams(Vec<TeamDto>),
    Players(Vec<PlayerDto>),
}

impl StageResult {
    /// Number of records carried by the envelope.
    pub fn len(&self) -> usize {
        match self {
            Self::Districts(links) | Self::Areas(links) | Self::Genders(links) => links.len(),
            Self::Flights(flights) => flights.len(),
            Self::Teams(teams) => teams.len(),
            Self::Players(players) => players.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
