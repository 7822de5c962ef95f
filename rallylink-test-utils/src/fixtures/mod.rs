//! Test fixtures created during test execution.
//!
//! - `auth` - Signed bearer tokens for the scrape endpoint
//! - `page` - Catalog HTML pages and the mock endpoints serving them
//! - `roster` - Team, player and membership records

pub mod auth;
pub mod page;
pub mod roster;
