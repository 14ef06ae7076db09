//! Failures that abort startup before the listener binds.

use thiserror::Error;

use postfeed::domain::ports::StorageIndexesError;
use postfeed::example_data::StartupSeedingError;
use postfeed::outbound::persistence::StoreError;
use postfeed::settings::SettingsError;

/// Reasons the service refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration could not be loaded.
    #[error("failed to load settings: {0}")]
    Load(String),
    /// A configured value is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// MongoDB could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Unique indexes could not be created.
    #[error("failed to ensure indexes: {0}")]
    Indexes(#[from] StorageIndexesError),
    /// Startup seeding failed.
    #[error(transparent)]
    Seeding(#[from] StartupSeedingError),
}

impl From<StartupError> for std::io::Error {
    fn from(err: StartupError) -> Self {
        Self::other(err)
    }
}
