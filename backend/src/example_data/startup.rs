//! Optional seeding before the server starts accepting traffic.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{PostRepository, UserRepository, UserRepositoryError};
use crate::domain::{ExampleDataSeeder, ExampleDataSeedingError, SeedReceipt};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed generation or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
}

/// What startup seeding did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupSeedOutcome {
    /// Seeding is disabled.
    Disabled,
    /// The store already held the example users; nothing was written.
    AlreadySeeded,
    /// Users and posts were inserted.
    Applied(SeedReceipt),
}

/// Seed example data when `enabled`.
///
/// A store that already holds the example users is left as is and reported
/// as [`StartupSeedOutcome::AlreadySeeded`], so restarts with seeding enabled
/// succeed.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] for any other generation or storage
/// failure.
pub async fn seed_example_data_on_startup<U, P>(
    enabled: bool,
    seeder: &ExampleDataSeeder<U, P>,
) -> Result<StartupSeedOutcome, StartupSeedingError>
where
    U: UserRepository,
    P: PostRepository,
{
    if !enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(StartupSeedOutcome::Disabled);
    }

    match seeder.seed_records().await {
        Ok(receipt) => {
            info!(
                users = receipt.users.inserted_count,
                posts = receipt.posts.inserted_count,
                "example data seeding applied"
            );
            Ok(StartupSeedOutcome::Applied(receipt))
        }
        Err(ExampleDataSeedingError::Users(UserRepositoryError::DuplicateKey { message })) => {
            info!(%message, "example data already present; skipping");
            Ok(StartupSeedOutcome::AlreadySeeded)
        }
        Err(err) => Err(err.into()),
    }
}
