//! Service layer.
//!
//! Services coordinate the fetcher, the HTML extraction rules and the repositories.
//! Stage dispatch lives in [`scrape`], roster reconciliation in [`roster`] and bearer
//! token checks in [`auth`].

pub mod auth;
pub mod roster;
pub mod scrape;
