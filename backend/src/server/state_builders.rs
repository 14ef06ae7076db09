//! Builders wiring the driven adapters into services for each backend.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use postfeed::domain::ports::{
    ExampleDataCommand, PostRepository, PostsQuery, StorageIndexes, UserRepository,
};
use postfeed::domain::{ExampleDataSeeder, PostsQueryService};
use postfeed::example_data::{StartupSeedOutcome, seed_example_data_on_startup};
use postfeed::inbound::http::state::HttpState;
use postfeed::outbound::persistence::{
    MongoPostRepository, MongoStorageIndexes, MongoUserRepository,
};

use super::{ServerConfig, StartupError, StoreBackend};

fn services_for<U, P>(
    users: Arc<U>,
    posts: Arc<P>,
    rng_seed: Option<u64>,
) -> (Arc<dyn PostsQuery>, Arc<ExampleDataSeeder<U, P>>)
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
{
    let query: Arc<dyn PostsQuery> = Arc::new(PostsQueryService::new(posts.clone()));
    let seeder = Arc::new(ExampleDataSeeder::new(users, posts).with_rng_seed(rng_seed));
    (query, seeder)
}

fn http_state_for<U, P>(users: Arc<U>, posts: Arc<P>, rng_seed: Option<u64>) -> HttpState
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
{
    let (query, seeder) = services_for(users, posts, rng_seed);
    HttpState::new(query, seeder as Arc<dyn ExampleDataCommand>)
}

/// Build the shared HTTP state for the configured backend.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.backend {
        StoreBackend::Mongo(store) => http_state_for(
            Arc::new(MongoUserRepository::new(store.clone())),
            Arc::new(MongoPostRepository::new(store.clone())),
            config.rng_seed,
        ),
        StoreBackend::Memory(store) => {
            let store = Arc::new(store.clone());
            http_state_for(store.clone(), store, config.rng_seed)
        }
    };
    web::Data::new(state)
}

async fn prepare<I, U, P>(
    indexes: &I,
    users: Arc<U>,
    posts: Arc<P>,
    rng_seed: Option<u64>,
    seed_on_startup: bool,
) -> Result<StartupSeedOutcome, StartupError>
where
    I: StorageIndexes,
    U: UserRepository + 'static,
    P: PostRepository + 'static,
{
    indexes.ensure_indexes().await?;
    let (_, seeder) = services_for(users, posts, rng_seed);
    Ok(seed_example_data_on_startup(seed_on_startup, &seeder).await?)
}

/// Ensure unique indexes exist, then run startup seeding when enabled.
///
/// # Errors
///
/// Returns [`StartupError`] when index creation or seeding fails.
pub async fn prepare_storage(
    config: &ServerConfig,
    seed_on_startup: bool,
) -> Result<StartupSeedOutcome, StartupError> {
    let outcome = match &config.backend {
        StoreBackend::Mongo(store) => {
            prepare(
                &MongoStorageIndexes::new(store.clone()),
                Arc::new(MongoUserRepository::new(store.clone())),
                Arc::new(MongoPostRepository::new(store.clone())),
                config.rng_seed,
                seed_on_startup,
            )
            .await?
        }
        StoreBackend::Memory(store) => {
            let shared = Arc::new(store.clone());
            prepare(
                store,
                shared.clone(),
                shared,
                config.rng_seed,
                seed_on_startup,
            )
            .await?
        }
    };
    info!(backend = config.backend.name(), ?outcome, "storage prepared");
    Ok(outcome)
}
