//! Tests for ScrapeService stage dispatch.
//!
//! Each stage is driven end to end against catalog pages served by the mock server.

mod dispatch;
mod flights;
mod links;
mod teams;

use rallylink::{model::scrape::StagePayload, server::service::scrape::ScrapeService};
use rallylink_test_utils::prelude::*;

use crate::util::TestContextExt;

fn href_payload(href: &str) -> StagePayload {
    StagePayload {
        href: Some(href.to_string()),
        ..Default::default()
    }
}
