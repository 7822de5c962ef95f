//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds the in-memory SQLite database and the mockito server that plays the catalog
//! host. The main crate's `Fetcher` and `AppState` are built from these by the tests
//! themselves, so this crate does not depend on the main crate.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_roster_tables()
///     .with_page_endpoint("/Team.aspx?id=7", page::roster_page(&[]), 1)
///     .build()
///     .await?;
///
/// let fetcher = Fetcher::new(reqwest::Client::new(), test.server_url());
/// test.roster().insert_mock_team("Net Results").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server standing in for the catalog host
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database and no mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock catalog host, without a trailing slash.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
