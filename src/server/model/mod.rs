//! Server-side domain models.
//!
//! [`stage`] turns the loosely typed stage payload into a closed set of typed requests,
//! [`roster`] carries scraped roster rows into reconciliation, and [`app`] holds the
//! shared handles passed to every request.

pub mod app;
pub mod roster;
pub mod stage;
