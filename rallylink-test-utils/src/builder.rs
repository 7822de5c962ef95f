//! Declarative test builder.
//!
//! Configuration methods queue work; `build()` creates the tables, inserts the fixtures
//! and registers the mock endpoints in that order.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_roster_tables: bool,

    // Database fixtures to insert
    teams: Vec<String>,
    players: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    page_endpoints: Vec<(String, String, usize)>, // (path, body, expected_requests)
    status_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_roster_tables: false,
            teams: Vec::new(),
            players: Vec::new(),
            mock_builders: Vec::new(),
            page_endpoints: Vec::new(),
            status_endpoints: Vec::new(),
        }
    }

    /// Add the team, player and membership tables.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rallylink_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), rallylink_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Team)
    ///     .with_table(entity::prelude::Player)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a team with the given name during `build()`.
    pub fn with_mock_team(mut self, name: impl Into<String>) -> Self {
        self.teams.push(name.into());
        self
    }

    /// Insert a player with the given href during `build()`.
    pub fn with_mock_player(mut self, href: impl Into<String>) -> Self {
        self.players.push(href.into());
        self
    }

    /// Serve `body` as an HTML page at `path` (path and query).
    ///
    /// # Arguments
    /// - `path` - Request path including any query string, e.g. `/Team.aspx?id=7`
    /// - `body` - HTML returned with a 200 status
    /// - `expected_requests` - Number of times the page must be fetched
    pub fn with_page_endpoint(
        mut self,
        path: impl Into<String>,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.page_endpoints
            .push((path.into(), body.into(), expected_requests));
        self
    }

    /// Answer requests for `path` with an empty body and the given status.
    pub fn with_status_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.status_endpoints
            .push((path.into(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_roster_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::PlayerTeam),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.teams {
            setup.roster().insert_mock_team(&name).await?;
        }

        for href in self.players {
            setup.roster().insert_mock_player(&href).await?;
        }

        // 3. Create mock endpoints, custom ones first so tests can layer sequential
        // responses on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, body, expected) in self.page_endpoints {
            mocks.push(setup.page().create_page_endpoint(&path, &body, expected));
        }

        for (path, status, expected) in self.status_endpoints {
            mocks.push(
                setup
                    .page()
                    .create_status_endpoint(&path, status, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
