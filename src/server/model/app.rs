use sea_orm::DatabaseConnection;

use crate::server::service::{auth::JwtAuthenticator, scrape::fetch::Fetcher};

/// Handles shared by every request. All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub fetcher: Fetcher,
    pub authenticator: JwtAuthenticator,
}
