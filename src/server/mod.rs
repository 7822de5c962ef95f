//! Server application core modules.
//!
//! HTTP routing, bearer authentication, the staged catalog scraper and the team and
//! player store it reconciles rosters into.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
