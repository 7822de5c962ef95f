//! Test harness for rallylink.
//!
//! Tests are set up in two phases. A [`TestBuilder`] declares tables, database fixtures
//! and mock catalog pages; `build()` turns it into a [`TestContext`] holding an in-memory
//! SQLite database and a mockito server that stands in for the catalog host.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant,
        fixtures::{auth, page},
        TestBuilder, TestContext, TestError,
    };
}
