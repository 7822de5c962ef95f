//! Shared values for test fixtures.
//!
//! None of these are real credentials.

/// Secret the test JWT helpers sign with; the authenticator under test must use the same.
pub static TEST_JWT_SECRET: &str = "rallylink_test_jwt_secret";

/// Subject of tokens issued by [`crate::fixtures::auth::admin_token`].
pub static TEST_ADMIN_USERNAME: &str = "admin";

/// User agent for fetchers pointed at the mock server.
pub static TEST_USER_AGENT: &str =
    "rallylink/test (admin@example.com; +https://github.com/autumn-order/rallylink)";

pub static TEST_TEAM_NAME: &str = "Net Results";
pub static TEST_GENDER: &str = "Female";
