//! Driving port for seeding example data.

use async_trait::async_trait;

use crate::domain::{Error, InsertReceipt, SeedReceipt};

/// Use-case port behind `GET /add`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExampleDataCommand: Send + Sync {
    /// Generate and insert the example users and posts.
    ///
    /// Returns the raw acknowledgements of both bulk inserts. A store that
    /// already holds the example users rejects the users insert, which
    /// surfaces as an [`crate::domain::ErrorCode::Conflict`] error.
    async fn seed(&self) -> Result<SeedReceipt, Error>;
}

/// Fixture command that writes nothing and acknowledges empty inserts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureExampleDataCommand;

#[async_trait]
impl ExampleDataCommand for FixtureExampleDataCommand {
    async fn seed(&self) -> Result<SeedReceipt, Error> {
        Ok(SeedReceipt {
            users: InsertReceipt::acknowledged(Vec::new()),
            posts: InsertReceipt::acknowledged(Vec::new()),
        })
    }
}
