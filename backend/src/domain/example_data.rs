//! Example data seeding orchestration.
//!
//! Turns generated seed records into domain users and posts and writes them
//! through the repository ports: users first, then posts. A failed users
//! insert stops the run before any post is written.

use std::sync::Arc;

use async_trait::async_trait;
use example_data::{GenerationError, SeedData, SeedPlan, fresh_rng_seed, generate_seed_data};
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::ports::{
    ExampleDataCommand, PostRepository, PostRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Error, Post, PostId, PostValidationError, SeedReceipt, User, UserId, UserValidationError,
};

/// Errors raised while preparing or writing example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Record generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user failed domain validation.
    #[error("generated user failed validation: {0}")]
    InvalidUser(#[from] UserValidationError),
    /// A generated post failed domain validation.
    #[error("generated post failed validation: {0}")]
    InvalidPost(#[from] PostValidationError),
    /// The users insert failed.
    #[error("users insert failed: {0}")]
    Users(#[from] UserRepositoryError),
    /// The posts insert failed.
    #[error("posts insert failed: {0}")]
    Posts(#[from] PostRepositoryError),
}

impl From<ExampleDataSeedingError> for Error {
    fn from(value: ExampleDataSeedingError) -> Self {
        match value {
            ExampleDataSeedingError::Users(UserRepositoryError::DuplicateKey { message }) => {
                Self::conflict("example data already present")
                    .with_details(json!({ "collection": "users", "reason": message }))
            }
            ExampleDataSeedingError::Posts(PostRepositoryError::DuplicateKey { message }) => {
                Self::conflict("example data already present")
                    .with_details(json!({ "collection": "posts", "reason": message }))
            }
            ExampleDataSeedingError::Users(UserRepositoryError::Connection { message })
            | ExampleDataSeedingError::Posts(PostRepositoryError::Connection { message }) => {
                Self::service_unavailable(format!("example data store unavailable: {message}"))
            }
            other => Self::internal(other.to_string()),
        }
    }
}

/// Service that generates and writes the example data set.
#[derive(Clone)]
pub struct ExampleDataSeeder<U, P> {
    users: Arc<U>,
    posts: Arc<P>,
    plan: SeedPlan,
    rng_seed: Option<u64>,
}

impl<U, P> ExampleDataSeeder<U, P> {
    /// Create a seeder for the standard plan with fresh identifiers per run.
    pub fn new(users: Arc<U>, posts: Arc<P>) -> Self {
        Self {
            users,
            posts,
            plan: SeedPlan::standard(),
            rng_seed: None,
        }
    }

    /// Replace the seed plan.
    #[must_use]
    pub fn with_plan(mut self, plan: SeedPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Pin the RNG seed so every run draws the same identifiers.
    #[must_use]
    pub fn with_rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }
}

impl<U, P> ExampleDataSeeder<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    /// Generate the plan's records and insert them.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if generation, validation, or
    /// either insert fails.
    pub async fn seed_records(&self) -> Result<SeedReceipt, ExampleDataSeedingError> {
        let rng_seed = self.rng_seed.unwrap_or_else(fresh_rng_seed);
        let data = generate_seed_data(&self.plan, rng_seed)?;
        let (users, posts) = into_domain(data)?;
        info!(
            rng_seed,
            users = users.len(),
            posts = posts.len(),
            "seeding example data"
        );

        let users_receipt = self.users.insert_users(&users).await?;
        let posts_receipt = self.posts.insert_posts(&posts).await?;
        info!(
            users = users_receipt.inserted_count,
            posts = posts_receipt.inserted_count,
            "example data inserted"
        );

        Ok(SeedReceipt {
            users: users_receipt,
            posts: posts_receipt,
        })
    }
}

#[async_trait]
impl<U, P> ExampleDataCommand for ExampleDataSeeder<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    async fn seed(&self) -> Result<SeedReceipt, Error> {
        self.seed_records().await.map_err(|err| {
            error!(error = %err, "example data seeding failed");
            Error::from(err)
        })
    }
}

fn into_domain(data: SeedData) -> Result<(Vec<User>, Vec<Post>), ExampleDataSeedingError> {
    let users = data
        .users
        .into_iter()
        .map(|seed| User::new(UserId::new(seed.id)?, seed.username, seed.email))
        .collect::<Result<Vec<_>, _>>()?;

    let mut posts = Vec::with_capacity(data.posts.len());
    for seed in data.posts {
        let authors = seed
            .authors
            .into_iter()
            .map(UserId::new)
            .collect::<Result<Vec<_>, _>>()?;
        posts.push(Post {
            id: PostId::new(seed.id)?,
            title: seed.title,
            content: seed.content,
            authors,
        });
    }
    Ok((users, posts))
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data seeding orchestration.

    use example_data::{PostBatch, UserSpec};
    use mockall::Sequence;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::{MockPostRepository, MockUserRepository};
    use crate::domain::{ErrorCode, InsertReceipt};

    fn receipt_for(count: usize) -> InsertReceipt {
        InsertReceipt::acknowledged((0..count).map(|i| format!("oid{i}")))
    }

    #[fixture]
    fn small_plan() -> SeedPlan {
        SeedPlan::new(
            vec![
                UserSpec::new("user1", "user1@example.com"),
                UserSpec::new("user2", "user2@example.com"),
            ],
            vec![PostBatch::new(0, 3, [0, 1])],
        )
        .expect("valid plan")
    }

    #[rstest]
    #[tokio::test]
    async fn inserts_users_before_posts(small_plan: SeedPlan) {
        let mut seq = Sequence::new();
        let mut users = MockUserRepository::new();
        let mut posts = MockPostRepository::new();
        users
            .expect_insert_users()
            .withf(|users| users.len() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|users| Ok(receipt_for(users.len())));
        posts
            .expect_insert_posts()
            .withf(|posts| posts.len() == 4 && posts.iter().all(|p| p.authors.len() == 2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|posts| Ok(receipt_for(posts.len())));

        let seeder =
            ExampleDataSeeder::new(Arc::new(users), Arc::new(posts)).with_plan(small_plan);
        let receipt = seeder.seed().await.expect("seed succeeds");

        assert_eq!(receipt.users.inserted_count, 2);
        assert_eq!(receipt.posts.inserted_count, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_users_stop_before_posts(small_plan: SeedPlan) {
        let mut users = MockUserRepository::new();
        let mut posts = MockPostRepository::new();
        users
            .expect_insert_users()
            .times(1)
            .return_once(|_| Err(UserRepositoryError::duplicate_key("username")));
        posts.expect_insert_posts().never();

        let seeder =
            ExampleDataSeeder::new(Arc::new(users), Arc::new(posts)).with_plan(small_plan);
        let err = seeder.seed().await.expect_err("conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
        let collection = err
            .details()
            .and_then(|details| details.get("collection"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(collection, Some("users"));
    }

    #[rstest]
    #[case(UserRepositoryError::connection("no primary"), ErrorCode::ServiceUnavailable)]
    #[case(UserRepositoryError::query("write concern"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn user_insert_failures_map_to_domain_errors(
        small_plan: SeedPlan,
        #[case] failure: UserRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut users = MockUserRepository::new();
        users
            .expect_insert_users()
            .return_once(move |_| Err(failure));
        let posts = MockPostRepository::new();

        let seeder =
            ExampleDataSeeder::new(Arc::new(users), Arc::new(posts)).with_plan(small_plan);
        let err = seeder.seed().await.expect_err("failure propagates");

        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn pinned_rng_seed_reproduces_identifiers(small_plan: SeedPlan) {
        let captured = Arc::new(std::sync::Mutex::new(Vec::<Vec<UserId>>::new()));
        let mut users = MockUserRepository::new();
        let sink = Arc::clone(&captured);
        users.expect_insert_users().times(2).returning(move |users| {
            let ids = users.iter().map(|u| u.id().clone()).collect();
            sink.lock().expect("capture lock").push(ids);
            Ok(receipt_for(users.len()))
        });
        let mut posts = MockPostRepository::new();
        posts
            .expect_insert_posts()
            .times(2)
            .returning(|posts| Ok(receipt_for(posts.len())));

        let seeder = ExampleDataSeeder::new(Arc::new(users), Arc::new(posts))
            .with_plan(small_plan)
            .with_rng_seed(Some(99));
        seeder.seed_records().await.expect("first run");
        seeder.seed_records().await.expect("second run");

        let runs = captured.lock().expect("capture lock");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.first(), runs.get(1));
    }
}
