//! HTTP controller endpoints for the rallylink API.
//!
//! Handlers take an authenticated caller from an extractor, hand the request to a service
//! and map the result or error to a response.

pub mod auth;
pub mod scrape;
