//! Staged tennis league catalog scraper.
//!
//! The public surface is split the same way the HTTP API is: [`model`] holds the wire
//! DTOs shared by handlers and tests, and [`server`] holds configuration, persistence,
//! services and routing.

pub mod model;
pub mod server;
