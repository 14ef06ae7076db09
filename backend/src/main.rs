//! postfeed entry-point: loads settings, opens storage, and serves HTTP.

mod server;

use std::time::Duration;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use postfeed::inbound::http::health::HealthState;
use postfeed::outbound::memory::InMemoryStore;
use postfeed::outbound::persistence::{MongoStore, StoreConfig};
use postfeed::settings::{ServiceSettings, StoreKind};
use server::{ServerConfig, StartupError, StoreBackend, create_server, prepare_storage};

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| StartupError::Load(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(StartupError::from)?;
    let backend = open_store(&settings).await?;
    info!(%bind_addr, backend = backend.name(), "starting postfeed");

    let config = ServerConfig::new(bind_addr, backend).with_rng_seed(settings.rng_seed);
    prepare_storage(&config, settings.seed_on_startup)
        .await
        .inspect_err(|e| error!(error = %e, "storage preparation failed"))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

async fn open_store(settings: &ServiceSettings) -> Result<StoreBackend, StartupError> {
    match settings.store()? {
        StoreKind::Memory => {
            warn!("using in-memory store; data is lost on exit");
            Ok(StoreBackend::Memory(InMemoryStore::new()))
        }
        StoreKind::Mongodb => {
            let config = StoreConfig::new(settings.mongodb_uri(), settings.database())
                .with_server_selection_timeout(SERVER_SELECTION_TIMEOUT);
            let store = MongoStore::connect(&config).await.map_err(|e| {
                error!(error = %e, "could not connect to MongoDB");
                StartupError::from(e)
            })?;
            Ok(StoreBackend::Mongo(store))
        }
    }
}
