//! HTML extraction rules for each navigation stage.
//!
//! The catalog pages share no schema. Each stage's rule is declared as a [`LinkSpec`] or
//! [`TableSpec`] constant and applied by the generic helpers below, so the layout
//! assumptions live in one place and can be tested against captured markup.
//!
//! Rows that fail a structural check (cell count, missing link) are dropped rather than
//! reported. A page without the expected table yields an empty result.

use scraper::{ElementRef, Html, Selector};

use crate::{
    model::scrape::{FlightDto, LinkDto, TeamDto},
    server::{error::scrape::ScrapeError, model::roster::ScrapedPlayer},
};

/// Anchors whose target contains a marker substring.
#[derive(Clone, Copy, Debug)]
pub struct LinkSpec {
    pub marker: &'static str,
}

/// Which of several matching tables to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablePick {
    First,
    /// Later tables on the page are narrower filtered views of earlier ones
    Last,
}

/// Cell count a data row must have to be kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnCount {
    Exactly(usize),
    AtLeast(usize),
}

impl ColumnCount {
    pub fn accepts(&self, cells: usize) -> bool {
        match *self {
            Self::Exactly(n) => cells == n,
            Self::AtLeast(n) => cells >= n,
        }
    }
}

/// Location of a data table and the shape its rows must have.
#[derive(Clone, Copy, Debug)]
pub struct TableSpec {
    /// Element the table must sit inside, searched first when set
    pub container: Option<&'static str>,
    pub table: &'static str,
    pub pick: TablePick,
    pub columns: ColumnCount,
}

pub const AREA_LINK_MARKER: &str = "t=R-3";
pub const AREA_NAME_LINK_MARKER: &str = "t=R-4";
pub const LEAGUE_FIND_LINK_MARKER: &str = "LeagueFind";
pub const DATA_TABLE: &str = "table.stats-table";
pub const TEAM_LIST_CONTAINER: &str = "div#teams-container";
pub const ROSTER_CONTAINER: &str = "div.container-large";
const ANCHOR: &str = "a[href]";

/// Stage 1: district links on the league listing.
pub const DISTRICT_LINKS: LinkSpec = LinkSpec {
    marker: AREA_LINK_MARKER,
};

/// Stage 2: area links on a district page.
pub const AREA_LINKS: LinkSpec = LinkSpec {
    marker: AREA_NAME_LINK_MARKER,
};

/// Stage 3: gender links on an area page.
pub const GENDER_LINKS: LinkSpec = LinkSpec {
    marker: LEAGUE_FIND_LINK_MARKER,
};

/// Stage 4: league name, flight, sub flight, team count.
pub const FLIGHT_TABLE: TableSpec = TableSpec {
    container: None,
    table: DATA_TABLE,
    pick: TablePick::Last,
    columns: ColumnCount::Exactly(4),
};

/// Stage 5: team name, players, top 5 rating, team rating, court rating.
pub const TEAM_TABLE: TableSpec = TableSpec {
    container: Some(TEAM_LIST_CONTAINER),
    table: DATA_TABLE,
    pick: TablePick::First,
    columns: ColumnCount::Exactly(5),
};

/// Stage 6: roster table inside the large content container. Only the columns listed
/// in the `ROSTER_*_CELL` constants are read; anything past the eleventh is ignored.
pub const ROSTER_TABLE: TableSpec = TableSpec {
    container: Some(ROSTER_CONTAINER),
    table: "table",
    pick: TablePick::First,
    columns: ColumnCount::AtLeast(11),
};

pub const ROSTER_NAME_CELL: usize = 0;
pub const ROSTER_LOCATION_CELL: usize = 1;
pub const ROSTER_NTRP_CELL: usize = 2;
pub const ROSTER_RATING_CELL: usize = 10;

/// Stage 1
pub fn districts(body: &str) -> Result<Vec<LinkDto>, ScrapeError> {
    extract_links(body, &DISTRICT_LINKS)
}

/// Stage 2
pub fn areas(body: &str) -> Result<Vec<LinkDto>, ScrapeError> {
    extract_links(body, &AREA_LINKS)
}

/// Stage 3
pub fn genders(body: &str) -> Result<Vec<LinkDto>, ScrapeError> {
    extract_links(body, &GENDER_LINKS)
}

/// Stage 4
pub fn flights(body: &str) -> Result<Vec<FlightDto>, ScrapeError> {
    let anchor = selector(ANCHOR)?;

    extract_table(body, &FLIGHT_TABLE, "flights", |cells| {
        Some(FlightDto {
            league_name: cell_text(&cells[0]),
            flight: cell_text(&cells[1]),
            sub_flight: cell_text(&cells[2]),
            teams: cell_text(&cells[3]),
            href: cell_href(&cells[0], &anchor)?,
        })
    })
}

/// Stage 5
pub fn teams(body: &str) -> Result<Vec<TeamDto>, ScrapeError> {
    let anchor = selector(ANCHOR)?;

    extract_table(body, &TEAM_TABLE, "teams", |cells| {
        Some(TeamDto {
            team_name: cell_text(&cells[0]),
            players: cell_text(&cells[1]),
            top_5_rating: cell_text(&cells[2]),
            team_rating: cell_text(&cells[3]),
            court_rating: cell_text(&cells[4]),
            href: cell_href(&cells[0], &anchor)?,
        })
    })
}

/// Stage 6
pub fn roster(body: &str) -> Result<Vec<ScrapedPlayer>, ScrapeError> {
    let anchor = selector(ANCHOR)?;

    extract_table(body, &ROSTER_TABLE, "players", |cells| {
        Some(ScrapedPlayer {
            name: cell_text(&cells[ROSTER_NAME_CELL]),
            href: cell_href(&cells[ROSTER_NAME_CELL], &anchor)?,
            location: cell_text(&cells[ROSTER_LOCATION_CELL]),
            ntrp: cell_text(&cells[ROSTER_NTRP_CELL]),
            rating: cell_text(&cells[ROSTER_RATING_CELL]),
        })
    })
}

/// Every anchor whose href contains the rule's marker, in document order.
pub fn extract_links(body: &str, spec: &LinkSpec) -> Result<Vec<LinkDto>, ScrapeError> {
    let document = Html::parse_document(body);
    let anchor_selector = selector(ANCHOR)?;

    let links = document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let href = anchor_href(&anchor)?;
            if !href.contains(spec.marker) {
                return None;
            }

            Some(LinkDto {
                text: cell_text(&anchor),
                href,
            })
        })
        .collect();

    Ok(links)
}

/// Applies a [`TableSpec`] and maps each surviving row with `map_row`.
///
/// `map_row` is only called with rows that passed the column check, so indexing up to
/// the rule's column count is safe. Returning `None` drops the row.
pub fn extract_table<T, F>(
    body: &str,
    spec: &TableSpec,
    label: &str,
    map_row: F,
) -> Result<Vec<T>, ScrapeError>
where
    F: Fn(&[ElementRef<'_>]) -> Option<T>,
{
    let document = Html::parse_document(body);

    let Some(table) = find_table(&document, spec)? else {
        tracing::debug!("No {} table found on page", label);
        return Ok(Vec::new());
    };

    let data_rows: Vec<ElementRef<'_>> = table_rows(table).into_iter().skip(1).collect();
    let total = data_rows.len();

    let records: Vec<T> = data_rows
        .into_iter()
        .filter_map(|row| {
            let cells = row_cells(row);
            if !spec.columns.accepts(cells.len()) {
                return None;
            }
            map_row(&cells)
        })
        .collect();

    let skipped = total - records.len();
    if skipped > 0 && records.is_empty() {
        tracing::warn!(
            "Dropped all {} {} rows, page layout may have changed",
            skipped,
            label
        );
    } else if skipped > 0 {
        tracing::debug!("Dropped {} of {} {} rows", skipped, total, label);
    }

    Ok(records)
}

fn find_table<'a>(
    document: &'a Html,
    spec: &TableSpec,
) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    let table_selector = selector(spec.table)?;

    let mut tables: Vec<ElementRef<'a>> = match spec.container {
        Some(container) => {
            let container_selector = selector(container)?;
            match document.select(&container_selector).next() {
                Some(container) => container.select(&table_selector).collect(),
                None => Vec::new(),
            }
        }
        None => document.select(&table_selector).collect(),
    };

    Ok(match spec.pick {
        TablePick::First => tables.into_iter().next(),
        TablePick::Last => tables.pop(),
    })
}

/// Rows that belong to `table` itself, not to tables nested inside its cells.
fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();

    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|row| row.value().name() == "tr"),
            ),
            _ => {}
        }
    }

    rows
}

fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect()
}

/// Text content with runs of whitespace (including `&nbsp;`) collapsed.
fn cell_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trimmed href of an anchor, `None` when blank.
fn anchor_href(anchor: &ElementRef<'_>) -> Option<String> {
    let href = anchor.value().attr("href")?.trim();

    (!href.is_empty()).then(|| href.to_string())
}

/// First non-blank link inside a cell.
fn cell_href(cell: &ElementRef<'_>, anchor_selector: &Selector) -> Option<String> {
    cell.select(anchor_selector).find_map(|anchor| anchor_href(&anchor))
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
