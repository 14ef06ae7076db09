//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use postfeed::outbound::memory::InMemoryStore;
use postfeed::outbound::persistence::MongoStore;

/// Storage the driven ports are wired to.
#[derive(Clone, Debug)]
pub enum StoreBackend {
    /// Connected MongoDB replica set.
    Mongo(MongoStore),
    /// Process-local store.
    Memory(InMemoryStore),
}

impl StoreBackend {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mongo(_) => "mongodb",
            Self::Memory(_) => "memory",
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) backend: StoreBackend,
    pub(crate) rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Construct a server configuration for `backend` listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, backend: StoreBackend) -> Self {
        Self {
            bind_addr,
            backend,
            rng_seed: None,
        }
    }

    /// Pin the RNG seed used by `GET /add`.
    #[must_use]
    pub fn with_rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
