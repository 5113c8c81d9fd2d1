//! Test setup shared by the catalog sync crate's unit and integration tests.
//!
//! Tests are written in two phases. A [`TestBuilder`] declares the tables, database rows and
//! mock HTTP endpoints a test needs, then [`TestBuilder::build`] returns a [`TestContext`]
//! holding the in-memory database and the mock catalog server.

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
        constant::TEST_API_KEY, fixtures::catalog::factory, TestBuilder, TestContext, TestError,
    };
}
