//! MongoDB client handle shared by the repository adapters.
//!
//! The driver keeps its own connection pool; [`MongoStore`] wraps the
//! selected database, whose handle shares that pool across clones. Pool
//! sizing uses the driver defaults.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use super::documents::{PostDocument, UserDocument};

/// Name of the users collection.
pub const USERS_COLLECTION: &str = "users";
/// Name of the posts collection.
pub const POSTS_COLLECTION: &str = "posts";

const APP_NAME: &str = "postfeed";

/// Errors raised while opening the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed or the client not built.
    #[error("invalid MongoDB configuration: {message}")]
    Configuration {
        /// Driver message.
        message: String,
    },
    /// The deployment did not answer the startup ping.
    #[error("MongoDB ping failed: {message}")]
    Ping {
        /// Driver message.
        message: String,
    },
}

/// Connection settings for [`MongoStore`].
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::new("mongodb://localhost:27017/?replicaSet=rs0", "postfeed")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// let store = MongoStore::connect(&config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    server_selection_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Create a configuration for `database` reached through `uri`.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            server_selection_timeout: None,
        }
    }

    /// Bound how long the driver waits for a suitable server.
    #[must_use]
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    /// Connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Handle on the MongoDB database holding users and posts.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and ping the database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] for an unusable connection
    /// string and [`StoreError::Ping`] when no server answers.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::Configuration {
                message: err.to_string(),
            })?;
        options.app_name = Some(APP_NAME.to_owned());
        if let Some(timeout) = config.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        let client = Client::with_options(options).map_err(|err| StoreError::Configuration {
            message: err.to_string(),
        })?;
        let database = client.database(config.database());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::Ping {
                message: err.to_string(),
            })?;
        info!(database = config.database(), "connected to MongoDB");

        Ok(Self { database })
    }

    /// The selected database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }

    pub(crate) fn posts(&self) -> Collection<PostDocument> {
        self.database.collection(POSTS_COLLECTION)
    }
}
