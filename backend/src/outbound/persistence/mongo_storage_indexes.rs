//! MongoDB-backed `StorageIndexes` adapter.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use tracing::info;

use crate::domain::ports::{StorageIndexes, StorageIndexesError};

use super::error_mapping::{FailureClass, classify};
use super::store::MongoStore;

fn unique_index(field: &str) -> IndexModel {
    let options = IndexOptions::builder()
        .unique(true)
        .name(format!("{field}_unique"))
        .build();
    IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(options)
        .build()
}

fn map_error(err: &mongodb::error::Error) -> StorageIndexesError {
    match classify(err) {
        FailureClass::Connection => StorageIndexesError::connection(err.to_string()),
        FailureClass::DuplicateKey | FailureClass::Query => {
            StorageIndexesError::query(err.to_string())
        }
    }
}

/// Creates the unique indexes on `users` and `posts`.
#[derive(Clone, Debug)]
pub struct MongoStorageIndexes {
    store: MongoStore,
}

impl MongoStorageIndexes {
    /// Create an index bootstrapper over `store`.
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StorageIndexes for MongoStorageIndexes {
    async fn ensure_indexes(&self) -> Result<(), StorageIndexesError> {
        self.store
            .users()
            .create_indexes([unique_index("id"), unique_index("username")])
            .await
            .map_err(|err| map_error(&err))?;
        self.store
            .posts()
            .create_index(unique_index("id"))
            .await
            .map_err(|err| map_error(&err))?;
        info!("storage indexes ensured");
        Ok(())
    }
}
