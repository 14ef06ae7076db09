//! Seed a MongoDB database with the example users and posts, then exit.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use example_data::SeedPlan;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use postfeed::domain::ExampleDataSeeder;
use postfeed::domain::ports::StorageIndexes;
use postfeed::outbound::persistence::{
    MongoPostRepository, MongoStorageIndexes, MongoStore, MongoUserRepository, StoreConfig,
};
use postfeed::settings::{DEFAULT_DATABASE, DEFAULT_MONGODB_URI};

/// `seed-store` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-store",
    about = "Insert example users and posts into MongoDB (3 users and 20,000 posts by default)",
    version
)]
struct CliArgs {
    /// MongoDB connection string.
    #[arg(long = "mongodb-uri", value_name = "uri", default_value = DEFAULT_MONGODB_URI)]
    mongodb_uri: String,
    /// Target database.
    #[arg(long = "database", value_name = "name", default_value = DEFAULT_DATABASE)]
    database: String,
    /// Fixed RNG seed for reproducible identifiers.
    #[arg(long = "rng-seed", value_name = "seed")]
    rng_seed: Option<u64>,
    /// JSON seed plan to use instead of the standard plan.
    #[arg(long = "plan", value_name = "path")]
    plan: Option<PathBuf>,
}

fn load_plan(path: Option<&Path>) -> io::Result<SeedPlan> {
    let Some(path) = path else {
        return Ok(SeedPlan::standard());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|error| io::Error::other(format!("read plan {}: {error}", path.display())))?;
    SeedPlan::from_json(&json)
        .map_err(|error| io::Error::other(format!("invalid plan {}: {error}", path.display())))
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let plan = load_plan(args.plan.as_deref())?;

    let config = StoreConfig::new(args.mongodb_uri, args.database)
        .with_server_selection_timeout(Duration::from_secs(10));
    let store = MongoStore::connect(&config)
        .await
        .map_err(|error| io::Error::other(format!("connect to MongoDB: {error}")))?;

    MongoStorageIndexes::new(store.clone())
        .ensure_indexes()
        .await
        .map_err(|error| io::Error::other(format!("ensure indexes: {error}")))?;

    let seeder = ExampleDataSeeder::new(
        Arc::new(MongoUserRepository::new(store.clone())),
        Arc::new(MongoPostRepository::new(store)),
    )
    .with_plan(plan)
    .with_rng_seed(args.rng_seed);
    let receipt = seeder
        .seed_records()
        .await
        .map_err(|error| io::Error::other(format!("seed example data: {error}")))?;

    let json = serde_json::to_string_pretty(&receipt).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
