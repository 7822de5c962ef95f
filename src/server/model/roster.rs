/// A player row scraped from a roster page, before reconciliation.
///
/// `href` is the catalog's per-player link and identifies the player across scrapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedPlayer {
    pub name: String,
    pub href: String,
    pub location: String,
    pub ntrp: String,
    pub rating: String,
}
